use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;

pub struct RemoveCartEntryParams {
    pub cart_id: Uuid,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveCartEntryUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartEntryParams) -> Result<CartView, CartError>;
}
