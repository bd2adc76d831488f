use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;

pub struct SubmitSaleParams {
    pub customer_name: String,
    pub cart: Cart,
}

#[async_trait]
pub trait SubmitSaleUseCase: Send + Sync {
    async fn execute(&self, params: SubmitSaleParams) -> Result<Sale, SaleError>;
}
