use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using `DATABASE_URL` (PostgreSQL in production, SQLite
/// works for local experiments), then runs every pending SeaORM migration so the schema is
/// current before the server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Builds the CORS layer.
///
/// Allows only `CORS_ALLOWED_ORIGIN` when it is set and any origin otherwise.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to apply to the router
/// - `Err(ConfigError::InvalidEnvVar)` - Configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            value: origin.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
