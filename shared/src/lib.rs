//! Shared configuration and response types for the Latchkey server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CleanupConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, LoggingConfig, PasswordConfig, ServerConfig, StorageBackend,
};
pub use config::{MAX_TOKEN_LIFETIME_SECONDS, MIN_PRODUCTION_SECRET_LEN};
pub use errors::{error_codes, ErrorResponse};
