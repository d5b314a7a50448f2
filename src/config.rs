use std::time::Duration;

use hextech_app::ApplicationSettings;
use hextech_http_api::HttpConfig;
use hextech_persistence_sea_orm::{DatabaseSettings, DatabaseSetupError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Http(#[from] hextech_http_api::ConfigError),
    #[error(transparent)]
    Database(#[from] DatabaseSetupError),
    #[error("TIER_LIST_CACHE_TTL_SECS must be a positive number of seconds, got '{0}'")]
    CacheTtl(String),
}

pub struct Settings {
    pub http: HttpConfig,
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            http: HttpConfig::from_env()?,
            database: DatabaseSettings::from_env()?,
            application: ApplicationSettings {
                tier_list_ttl: parse_cache_ttl(std::env::var("TIER_LIST_CACHE_TTL_SECS").ok())?,
            },
        })
    }
}

fn parse_cache_ttl(raw: Option<String>) -> Result<Option<Duration>, SettingsError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(SettingsError::CacheTtl(raw)),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
    }
}
