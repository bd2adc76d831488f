use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CartError::NotFound | CartError::ProductNotFound | CartError::EntryNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            CartError::InvalidQuantity | CartError::ExceedsStock => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
