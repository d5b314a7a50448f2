use hextech_persistence_sea_orm_entities::champion;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use thiserror::Error;

pub mod champions;

const DEFAULT_DATABASE_URL: &str = "sqlite://hextech.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("invalid database configuration: {0}")]
    Config(String),
    #[error("failed to connect to database: {0}")]
    Connection(DbErr),
    #[error("failed to create schema: {0}")]
    Schema(DbErr),
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, falling back to a local sqlite file.
    pub fn from_env() -> Result<Self, DatabaseSetupError> {
        let url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.trim().parse::<u32>().map_err(|_| {
                DatabaseSetupError::Config(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                    value
                ))
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(DatabaseSetupError::Config(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            url,
            max_connections,
        })
    }
}

pub async fn connect(
    settings: &DatabaseSettings,
) -> Result<DatabaseConnection, DatabaseSetupError> {
    let mut opt = ConnectOptions::new(&settings.url);
    opt.max_connections(settings.max_connections).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(DatabaseSetupError::Connection)?;
    create_schema(&db).await?;
    log::info!("Connected to database at {}", settings.url);
    Ok(db)
}

/// Creates the `champions` table unless it already exists.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DatabaseSetupError> {
    let schema = Schema::new(db.get_database_backend());
    let mut champions_table = schema.create_table_from_entity(champion::Entity);
    champions_table.if_not_exists();

    db.execute(&champions_table)
        .await
        .map_err(DatabaseSetupError::Schema)?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_db() -> DatabaseConnection {
    connect(&DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("Failed to open in-memory database")
}
