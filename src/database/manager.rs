use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the data access layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("unrecognized value {value:?} in column {column}")]
    Decode { column: &'static str, value: String },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Classify a driver error, surfacing the store's duplicate-key signal
    pub fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DatabaseError::Duplicate(db_err.message().to_string())
            }
            _ => DatabaseError::Sqlx(err),
        }
    }
}

/// Owns the connection pools for the account and game content schemas.
///
/// Pools connect lazily, so the process starts even while MySQL is
/// unreachable; connections are acquired per store call and returned to the
/// pool when the guard drops.
pub struct DatabaseManager {
    account: MySqlPool,
    game: MySqlPool,
}

impl DatabaseManager {
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let account = Self::build_pool(config, &config.account_schema);
        let game = Self::build_pool(config, &config.game_schema);
        Self { account, game }
    }

    fn build_pool(config: &DatabaseConfig, schema: &str) -> MySqlPool {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_lazy_with(Self::connect_options(config, schema));

        info!(host = %config.host, schema = %schema, "Created database pool");
        pool
    }

    fn connect_options(config: &DatabaseConfig, schema: &str) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(schema)
    }

    /// Pool for the `UserInfo` table
    pub fn account_pool(&self) -> MySqlPool {
        self.account.clone()
    }

    /// Pool for the read-only content tables
    pub fn game_pool(&self) -> MySqlPool {
        self.game.clone()
    }

    /// Close both pools (e.g., on shutdown)
    pub async fn close_all(&self) {
        self.account.close().await;
        self.game.close().await;
        info!("Closed database pools");
    }
}

/// Pings a pool on a freshly acquired connection
pub async fn ping(pool: &MySqlPool) -> Result<(), DatabaseError> {
    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT 1").execute(&mut *conn).await?;
    Ok(())
}
