use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::UserIdEmpty | CartError::ProductIdEmpty | CartError::InvalidQuantity => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CartError::Store(StoreError::StorageUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "StorageUnavailable")
            }
            CartError::Store(StoreError::ConfigurationInvalid(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
