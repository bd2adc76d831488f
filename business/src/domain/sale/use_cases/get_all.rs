use async_trait::async_trait;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;
use crate::domain::sale::value_objects::SaleStatus;

pub struct GetAllSalesParams {
    pub status: Option<SaleStatus>,
}

#[async_trait]
pub trait GetAllSalesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllSalesParams) -> Result<Vec<Sale>, SaleError>;
}
