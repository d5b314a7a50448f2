use std::sync::Arc;

use axum::{Router, routing::get};
use hextech_app::Application;
use log::info;

use crate::{AppState, HttpConfig, cors::cors_layer};

mod champions;

pub fn router(app: Arc<Application>, allowed_origins: &[String]) -> Router {
    let router: Router<AppState> = Router::new().nest(
        "/api",
        Router::new().route("/champions/stats", get(champions::get_stats)),
    );

    router
        .layer(cors_layer(allowed_origins))
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    config: HttpConfig,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let router = router(app, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(
        "API server listening on {} (allowed origins: {})",
        listener.local_addr()?,
        config.allowed_origins.join(", ")
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
