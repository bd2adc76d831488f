use business::domain::errors::RepositoryError;

const CHECK_VIOLATION: &str = "23514";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

/// Raised by the `sale_items` stock trigger.
const STOCK_TRIGGER_CONSTRAINT: &str = "sale_items_stock_available";
/// `products.stock >= 0`.
const STOCK_CHECK_CONSTRAINT: &str = "products_stock_non_negative";

/// Translates a sqlx error into the domain's repository error.
///
/// Stock shortfalls raised by the `sale_items` trigger (or the
/// `stock >= 0` check) surface as `InsufficientStock`; a line item pointing
/// at a missing product surfaces as `NotFound`. Other check violations are
/// plain database errors.
pub fn map_db_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::not_found(),
        sqlx::Error::Database(db) => match db.code().as_deref() {
            Some(CHECK_VIOLATION) => {
                let mapped = map_check_violation(db.constraint());
                if matches!(mapped, RepositoryError::DatabaseError) {
                    tracing::error!("Check violation: {}", db.message());
                }
                mapped
            }
            Some(FOREIGN_KEY_VIOLATION) => RepositoryError::not_found(),
            Some(UNIQUE_VIOLATION) => RepositoryError::duplicated(),
            _ => {
                tracing::error!("Database error: {}", db.message());
                RepositoryError::database_error()
            }
        },
        _ => {
            tracing::error!("Database error: {err}");
            RepositoryError::database_error()
        }
    }
}

fn map_check_violation(constraint: Option<&str>) -> RepositoryError {
    match constraint {
        Some(STOCK_TRIGGER_CONSTRAINT) | Some(STOCK_CHECK_CONSTRAINT) => {
            RepositoryError::insufficient_stock()
        }
        _ => RepositoryError::database_error(),
    }
}
