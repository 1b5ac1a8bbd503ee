use once_cell::sync::OnceCell;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::database::mapper::EnumDecodePolicy;

/// Errors raised while reading the process environment at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Connection settings shared by the account and game content schemas
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub account_schema: String,
    pub game_schema: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("account_schema", &self.account_schema)
            .field("game_schema", &self.game_schema)
            .field("max_connections", &self.max_connections)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_request_size_bytes: usize,
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub enum_policy: EnumDecodePolicy,
}

/// Connection fields that have no sensible default
struct Required {
    host: String,
    user: String,
    password: String,
    account_schema: String,
    game_schema: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Required connection variables are checked first, then the preset for
    /// `APP_ENV` is applied and finally individual overrides.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| present(key).ok_or(ConfigError::Missing(key));

        let required = Required {
            host: require("DB_HOST")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            // DB_NAME is the variable older deployments set for the account schema
            account_schema: present("DB_ACCOUNT_NAME")
                .or_else(|| present("DB_NAME"))
                .ok_or(ConfigError::Missing("DB_ACCOUNT_NAME"))?,
            game_schema: require("DB_GAME_NAME")?,
        };

        match environment {
            Environment::Production => Self::production(required),
            Environment::Staging => Self::staging(required),
            Environment::Development => Self::development(required),
        }
        .with_overrides(&lookup)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Database overrides
        if let Some(v) = parse_var(lookup, "DB_PORT")? {
            self.database.port = v;
        }
        if let Some(v) = parse_var(lookup, "DATABASE_MAX_CONNECTIONS")? {
            self.database.max_connections = v;
        }
        if let Some(v) = parse_var(lookup, "DATABASE_CONNECTION_TIMEOUT")? {
            self.database.connection_timeout = v;
        }

        // API overrides
        if let Some(v) = parse_var(lookup, "API_PORT")? {
            self.api.port = v;
        } else if let Some(v) = parse_var(lookup, "PORT")? {
            self.api.port = v;
        }
        if let Some(v) = parse_var::<u64, F>(lookup, "API_REQUEST_TIMEOUT_SECS")? {
            if v == 0 {
                return Err(ConfigError::Invalid {
                    key: "API_REQUEST_TIMEOUT_SECS",
                    value: v.to_string(),
                });
            }
            self.api.request_timeout_secs = v;
        }
        if let Some(v) = parse_var(lookup, "API_MAX_REQUEST_SIZE_BYTES")? {
            self.api.max_request_size_bytes = v;
        }
        if let Some(v) = parse_var(lookup, "API_ENABLE_REQUEST_LOGGING")? {
            self.api.enable_request_logging = v;
        }

        // Security overrides
        if let Some(v) = parse_var::<u32, F>(lookup, "BCRYPT_COST")? {
            if !(4..=31).contains(&v) {
                return Err(ConfigError::Invalid {
                    key: "BCRYPT_COST",
                    value: v.to_string(),
                });
            }
            self.security.bcrypt_cost = v;
        }

        // Content overrides
        if let Some(v) = parse_var(lookup, "CONTENT_ENUM_POLICY")? {
            self.content.enum_policy = v;
        }

        Ok(self)
    }

    fn database(
        required: Required,
        max_connections: u32,
        connection_timeout: u64,
    ) -> DatabaseConfig {
        DatabaseConfig {
            host: required.host,
            port: 3306,
            user: required.user,
            password: required.password,
            account_schema: required.account_schema,
            game_schema: required.game_schema,
            max_connections,
            connection_timeout,
        }
    }

    fn development(required: Required) -> Self {
        Self {
            environment: Environment::Development,
            database: Self::database(required, 5, 30),
            api: ApiConfig {
                port: 3000,
                request_timeout_secs: 30,
                max_request_size_bytes: 1024 * 1024, // 1MB
                enable_request_logging: true,
            },
            security: SecurityConfig { bcrypt_cost: 10 },
            content: ContentConfig {
                enum_policy: EnumDecodePolicy::Fallback,
            },
        }
    }

    fn staging(required: Required) -> Self {
        Self {
            environment: Environment::Staging,
            database: Self::database(required, 10, 10),
            api: ApiConfig {
                port: 3000,
                request_timeout_secs: 15,
                max_request_size_bytes: 512 * 1024,
                enable_request_logging: true,
            },
            security: SecurityConfig {
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
            content: ContentConfig {
                enum_policy: EnumDecodePolicy::Fallback,
            },
        }
    }

    fn production(required: Required) -> Self {
        Self {
            environment: Environment::Production,
            database: Self::database(required, 20, 5),
            api: ApiConfig {
                port: 3000,
                request_timeout_secs: 10,
                max_request_size_bytes: 256 * 1024,
                enable_request_logging: false,
            },
            security: SecurityConfig {
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
            content: ContentConfig {
                enum_policy: EnumDecodePolicy::Fallback,
            },
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

// Global config - initialized once at startup, read-only afterwards
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Load the configuration from the environment on first call
pub fn init() -> Result<&'static AppConfig, ConfigError> {
    CONFIG.get_or_try_init(AppConfig::from_env)
}
