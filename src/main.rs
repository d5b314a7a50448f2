use std::sync::Arc;

use hextech_app::build_application;
use hextech_persistence_sea_orm::{champions::ChampionRepositoryImpl, connect};
use log::{error, info};

use crate::config::Settings;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logs::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let db = match connect(&settings.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let champion_repo = Arc::new(ChampionRepositoryImpl::new(db));

    let app = Arc::new(build_application(champion_repo, settings.application));

    // Seeding finishes before the listener is bound.
    if let Err(e) = app.seed_champions_use_case.seed_if_empty().await {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Starting application");

    if let Err(e) = hextech_http_api::http::run(app, settings.http, shutdown_signal()).await {
        error!("HTTP API failed: {}", e);
        std::process::exit(1);
    }
}
