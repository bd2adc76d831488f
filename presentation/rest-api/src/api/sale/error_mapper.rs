use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::sale::errors::SaleError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SaleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SaleError::CustomerNameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "sale.customer_name_empty",
            ),
            SaleError::EmptyCart => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "sale.empty_cart")
            }
            SaleError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", "sale.not_found"),
            SaleError::AlreadyFulfilled => {
                error_response(StatusCode::CONFLICT, "Conflict", "sale.already_fulfilled")
            }
            SaleError::InsufficientStock => {
                error_response(StatusCode::CONFLICT, "Conflict", "sale.insufficient_stock")
            }
            SaleError::Cart(err) => err.into_error_response(),
            SaleError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::errors::CartError;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_400() {
        let (status, json) = SaleError::CustomerNameEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "sale.customer_name_empty");

        let (status, _) = SaleError::EmptyCart.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_store_stock_rejection_to_409() {
        let (status, json) = SaleError::InsufficientStock.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "Conflict");
    }

    #[test]
    fn should_delegate_cart_errors() {
        let (status, json) = SaleError::Cart(CartError::ExceedsStock).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "cart.exceeds_stock");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            SaleError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
