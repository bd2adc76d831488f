#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.exceeds_stock")]
    ExceedsStock,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.entry_not_found")]
    EntryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
