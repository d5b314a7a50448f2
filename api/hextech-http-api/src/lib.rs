use std::sync::Arc;

use axum::response::IntoResponse;
use hextech_app::Application;
use thiserror::Error;

pub mod config;
pub mod cors;
pub mod http;

pub use config::{ConfigError, HttpConfig};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, msg) = match self {
            ServiceError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}
