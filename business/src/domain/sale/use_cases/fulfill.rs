use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;

pub struct FulfillSaleParams {
    pub id: Uuid,
}

#[async_trait]
pub trait FulfillSaleUseCase: Send + Sync {
    async fn execute(&self, params: FulfillSaleParams) -> Result<Sale, SaleError>;
}
