#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale.customer_name_empty")]
    CustomerNameEmpty,
    #[error("sale.empty_cart")]
    EmptyCart,
    #[error("sale.not_found")]
    NotFound,
    #[error("sale.already_fulfilled")]
    AlreadyFulfilled,
    #[error("sale.insufficient_stock")]
    InsufficientStock,
    #[error(transparent)]
    Cart(#[from] crate::domain::cart::errors::CartError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
