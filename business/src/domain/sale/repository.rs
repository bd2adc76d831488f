use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Sale;
use super::value_objects::SaleStatus;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Returns sales newest first with their line items, optionally only
    /// those in `status`.
    async fn get_all(&self, status: Option<SaleStatus>) -> Result<Vec<Sale>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Sale, RepositoryError>;
    /// Stores the sale and all of its line items atomically. Each line item
    /// decrements its product's stock; any shortfall rejects the whole sale
    /// with `RepositoryError::InsufficientStock`.
    async fn create(&self, sale: &Sale) -> Result<(), RepositoryError>;
    /// Moves a pending sale to `Fulfilled`. Returns `NotFound` when no pending
    /// sale with that id exists.
    async fn mark_fulfilled(&self, id: Uuid) -> Result<(), RepositoryError>;
}
