use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::{limit::ConcurrencyLimitLayer, timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

use crate::api::handlers;
use crate::api::middleware::log_requests;
use crate::api::server_config::*;
use crate::api::types::ApiResponse;
use crate::core::Settings;
use crate::repository::WalletRepository;
use crate::service::{WalletService, WalletVerificationUseCase};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub app_name: Arc<str>,
    pub use_case: Arc<WalletVerificationUseCase>,
}

#[derive(Clone)]
pub struct RiskApiServer {
    pub settings: Settings,
    pub use_case: Arc<WalletVerificationUseCase>,
    pub host: String,
    pub port: u16,
}

impl RiskApiServer {
    /// Wire repository, service and use case from settings. Nothing is loaded yet.
    pub fn new(settings: Settings, host: String, port: u16) -> Self {
        let repository = Arc::new(WalletRepository::from_path(settings.dataset_path.clone()));
        let service = WalletService::from_settings(repository, &settings);
        let use_case = Arc::new(WalletVerificationUseCase::new(service));
        Self::with_use_case(settings, use_case, host, port)
    }

    pub fn with_use_case(
        settings: Settings,
        use_case: Arc<WalletVerificationUseCase>,
        host: String,
        port: u16,
    ) -> Self {
        Self { settings, use_case, host, port }
    }

    pub fn create_router(&self) -> Router {
        let state = AppState {
            app_name: Arc::from(self.settings.app_name.as_str()),
            use_case: Arc::clone(&self.use_case),
        };

        let wallet_routes = Router::new()
            .route("/wallets/verify", post(handlers::verify_wallet))
            .route("/wallets/metadata", get(handlers::dataset_metadata));

        let api = if self.settings.api_prefix == "/" {
            wallet_routes
        } else {
            Router::new().nest(&self.settings.api_prefix, wallet_routes)
        };

        Router::new()
            .route("/health", get(handlers::health_check))
            .merge(api)
            .with_state(state)
            .layer(middleware::from_fn(log_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_layer_error))
                    .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENCY))
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                    .layer(TraceLayer::new_for_http()),
            )
    }

    /// Load the dataset eagerly, then serve until the listener fails.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let metadata = self.use_case.metadata()?;
        info!(
            records = metadata.records,
            dataset = %self.settings.dataset_path.display(),
            "Dataset ready"
        );

        let app = self.create_router();
        let addr = format!("{}:{}", self.host, self.port);
        info!(app = %self.settings.app_name, prefix = %self.settings.api_prefix, "Server listening on {}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn handle_layer_error(err: BoxError) -> (StatusCode, Json<ApiResponse<()>>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ApiResponse::failure("request timed out", None)),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failure("service overloaded", None)),
        )
    }
}
