use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;

pub struct AddCartEntryParams {
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[async_trait]
pub trait AddCartEntryUseCase: Send + Sync {
    async fn execute(&self, params: AddCartEntryParams) -> Result<CartView, CartError>;
}
