use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::RegistryError;

/// JSON error body in the `{"detail": "..."}` shape clients match on.
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
            RegistryError::AlreadySignedUp
            | RegistryError::NotSignedUp
            | RegistryError::ActivityFull => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
