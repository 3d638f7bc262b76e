// predictor-backend/src/api/mod.rs
use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, security_headers_middleware, SessionProvider};
use crate::service::admin_service::AdminService;
use axum::{http::Uri, middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<AdminService>,
    pub session_provider: Arc<dyn SessionProvider>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        admin_service: Arc<AdminService>,
        session_provider: Arc<dyn SessionProvider>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            admin_service,
            session_provider,
            config,
        }
    }
}

/// 全ルーターとミドルウェアを組み立てる
pub fn build_app(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_allowed_origins);

    Router::new()
        .merge(handlers::admin_handler::admin_router(app_state.clone()))
        .merge(handlers::system_handler::system_router(app_state))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
