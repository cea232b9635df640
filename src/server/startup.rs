use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskboard=debug,tower_http=info,info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations. This must complete before any handler touches the store.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the board database.
///
/// Sessions expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// Builds the CORS layer from the configured origins.
///
/// With no origins configured any origin is allowed and credentials are not. Otherwise
/// only the listed origins may call the API, with credentials.
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    if config.cors_origins.is_empty() {
        tracing::info!("CORS: allowing all origins");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGINS".to_string(),
                    reason: format!("{origin}: {e}"),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("CORS: allowing origins {:?}", config.cors_origins);

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origins: &[&str]) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
            session_secure: false,
        }
    }

    #[test]
    fn accepts_configured_origins() {
        assert!(build_cors_layer(&config(&[])).is_ok());
        assert!(build_cors_layer(&config(&["http://localhost:3000"])).is_ok());
    }

    #[test]
    fn rejects_unparseable_origin() {
        let result = build_cors_layer(&config(&["http://bad\norigin"]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
