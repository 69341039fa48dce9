//! Health check

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::server::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": &*state.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "dataset_loaded": state.use_case.service().repository().is_loaded(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
