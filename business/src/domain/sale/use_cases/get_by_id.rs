use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;

pub struct GetSaleByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetSaleByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetSaleByIdParams) -> Result<Sale, SaleError>;
}
