/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// The store refused a write that would drive a product's stock below zero.
    #[error("repository.insufficient_stock")]
    InsufficientStock,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn insufficient_stock() -> Self {
        RepositoryError::InsufficientStock
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
