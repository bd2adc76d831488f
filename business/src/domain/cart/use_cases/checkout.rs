use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::sale::errors::SaleError;
use crate::domain::sale::model::Sale;

pub struct CheckoutCartParams {
    pub cart_id: Uuid,
    pub customer_name: String,
}

/// Submits the cart as a sale. Once the sale is recorded the sold
/// quantities leave the cart, and a cart left empty is dropped; on any
/// failure the cart is left as it was.
#[async_trait]
pub trait CheckoutCartUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutCartParams) -> Result<Sale, SaleError>;
}
