use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::api::types::{ApiResponse, FieldError};
use crate::core::RiskIntelError;

/// Handler failure, rendered as an error envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before lookup
    Validation(Vec<FieldError>),
    Service(RiskIntelError),
}

impl From<RiskIntelError> for ApiError {
    fn from(err: RiskIntelError) -> Self {
        Self::Service(err)
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::Validation(vec![err])
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(RiskIntelError::InvalidInput(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(RiskIntelError::DatasetNotFound(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body: ApiResponse<()> = match self {
            Self::Validation(errors) => ApiResponse::failure("Solicitud invalida", Some(errors)),
            Self::Service(err) => {
                error!(error = %err, "Wallet lookup failed");
                ApiResponse::failure(err.to_string(), None)
            }
        };
        (status, Json(body)).into_response()
    }
}
