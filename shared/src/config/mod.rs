//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing, password hashing and revocation cleanup
//! - `database` - Storage backend and connection pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, CleanupConfig, JwtConfig, PasswordConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Minimum signing secret length accepted outside development
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Longest token lifetime accepted, in seconds (one year)
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Errors raised while validating a loaded configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-default value in {environment}")]
    DefaultSecret { environment: Environment },

    #[error("JWT_SECRET is too short: {actual} bytes (minimum {minimum})")]
    SecretTooShort { actual: usize, minimum: usize },

    #[error("Token lifetime must be between 1 and {maximum} seconds, got {seconds}")]
    InvalidTokenLifetime { seconds: i64, maximum: i64 },

    #[error("DATABASE_URL is required for the mysql storage backend")]
    MissingDatabaseUrl,

    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults appropriate for the given environment, without reading variables
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::for_environment(environment),
            auth: AuthConfig::default(),
            cors: if environment.is_production() {
                CorsConfig::default()
            } else {
                CorsConfig::development()
            },
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` for a variable that is set but does not
    /// parse. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;
        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env(environment)?,
            auth: AuthConfig::from_env()?,
            cors: CorsConfig::from_env(environment)?,
            logging: LoggingConfig::from_env(environment)?,
        })
    }

    /// Reject configurations that are unsafe or cannot start
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lifetime = self.auth.jwt.token_lifetime;
        if lifetime <= 0 || lifetime > MAX_TOKEN_LIFETIME_SECONDS {
            return Err(ConfigError::InvalidTokenLifetime {
                seconds: lifetime,
                maximum: MAX_TOKEN_LIFETIME_SECONDS,
            });
        }

        if !self.environment.is_development() {
            if self.auth.jwt.is_using_default_secret() {
                return Err(ConfigError::DefaultSecret {
                    environment: self.environment,
                });
            }
            if self.auth.jwt.secret.len() < MIN_PRODUCTION_SECRET_LEN {
                return Err(ConfigError::SecretTooShort {
                    actual: self.auth.jwt.secret.len(),
                    minimum: MIN_PRODUCTION_SECRET_LEN,
                });
            }
        }

        if self.database.backend == StorageBackend::MySql && self.database.url.is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        Ok(())
    }
}

/// Read and parse an environment variable, falling back to `default`
/// only when it is unset.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(std::env::VarError::NotUnicode(value)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string_lossy().into_owned(),
        }),
    }
}
