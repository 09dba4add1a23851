//! Storage configuration module

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{env_or, ConfigError};
use super::environment::Environment;

/// Where accounts and revocation records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MySQL via SQLx
    MySql,
    /// Process-local maps, lost on restart
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::MySql => write!(f, "mysql"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Storage backend
    pub backend: StorageBackend,

    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::MySql,
            url: String::from("mysql://localhost:3306/latchkey"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Defaults for an environment: development runs in memory
    pub fn for_environment(environment: Environment) -> Self {
        let backend = if environment.is_development() {
            StorageBackend::Memory
        } else {
            StorageBackend::MySql
        };
        Self {
            backend,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(environment);
        Ok(Self {
            backend: env_or("STORAGE_BACKEND", defaults.backend)?,
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout)?,
            ..defaults
        })
    }

    /// Create a new MySQL configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("mysql".parse::<StorageBackend>(), Ok(StorageBackend::MySql));
        assert_eq!("MEMORY".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("postgres".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_environment_defaults() {
        assert_eq!(
            DatabaseConfig::for_environment(Environment::Development).backend,
            StorageBackend::Memory
        );
        assert_eq!(
            DatabaseConfig::for_environment(Environment::Production).backend,
            StorageBackend::MySql
        );
    }

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new("mysql://db/latchkey").with_max_connections(50);
        assert_eq!(config.url, "mysql://db/latchkey");
        assert_eq!(config.max_connections, 50);
    }
}
