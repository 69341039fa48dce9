//! Wallet verification handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::api::types::{ApiResponse, FieldError, VerifyWalletRequest};
use crate::api::validators::validate_address;
use crate::core::DatasetMetadata;
use crate::service::WalletVerification;

pub const MSG_WALLET_FOUND: &str = "Wallet encontrada en el dataset de riesgo";
pub const MSG_WALLET_NOT_FOUND: &str = "Wallet no encontrada en el dataset";
pub const MSG_METADATA: &str = "Metadata recuperada";

/// POST {prefix}/wallets/verify
pub async fn verify_wallet(
    State(state): State<AppState>,
    payload: Result<Json<VerifyWalletRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<WalletVerification>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    })?;
    let address = validate_address(&request.address)?;

    let result = state.use_case.verify(address)?;
    info!(address = %address, found = result.found, "Wallet verification");

    let message = if result.found {
        MSG_WALLET_FOUND
    } else {
        MSG_WALLET_NOT_FOUND
    };
    Ok(Json(ApiResponse::success(message, result)))
}

/// GET {prefix}/wallets/metadata
pub async fn dataset_metadata(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DatasetMetadata>>, ApiError> {
    let metadata = state.use_case.metadata()?;
    Ok(Json(ApiResponse::success(MSG_METADATA, metadata)))
}
