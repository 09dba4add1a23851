//! Authentication configuration: token signing, password hashing and
//! revocation cleanup

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{env_or, ConfigError};

/// Placeholder secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (never serialized or printed)
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token lifetime in seconds
    pub token_lifetime: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_lifetime: 1800, // 30 minutes
            issuer: String::from("latchkey"),
            algorithm: default_algorithm(),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("token_lifetime", &self.token_lifetime)
            .field("issuer", &self.issuer)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in minutes
    pub fn with_lifetime_minutes(mut self, minutes: i64) -> Self {
        self.token_lifetime = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            token_lifetime: env_or("JWT_TOKEN_LIFETIME", defaults.token_lifetime)?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
        })
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bcrypt_cost: env_or("BCRYPT_COST", Self::default().bcrypt_cost)?,
        })
    }
}

/// Configuration for the periodic purge of expired revocation records
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            interval_seconds: env_or("REVOCATION_CLEANUP_INTERVAL", defaults.interval_seconds)?,
            enabled: env_or("REVOCATION_CLEANUP_ENABLED", defaults.enabled)?,
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Revocation cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            password: PasswordConfig::from_env()?,
            cleanup: CleanupConfig::from_env()?,
        })
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_lifetime, 1800);
        assert_eq!(config.issuer, "latchkey");
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_lifetime_minutes(5);
        assert_eq!(config.token_lifetime, 300);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-signing-key");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-signing-key"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn test_cleanup_from_env_rejects_unparseable_flag() {
        std::env::set_var("REVOCATION_CLEANUP_ENABLED", "off");
        let result = CleanupConfig::from_env();
        std::env::remove_var("REVOCATION_CLEANUP_ENABLED");

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue {
                key: "REVOCATION_CLEANUP_ENABLED".to_string(),
                value: "off".to_string(),
            }
        );
    }

    #[test]
    fn test_serialize_skips_secret() {
        let config = JwtConfig::new("super-secret-signing-key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret-signing-key"));
    }
}
