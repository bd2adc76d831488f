use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Forgets the cart. Deleting an unknown cart is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
