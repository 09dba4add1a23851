//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Length of a hex-encoded token id (128 random bits)
pub const JTI_LENGTH: usize = 32;

/// Default JWT issuer
pub const DEFAULT_ISSUER: &str = "latchkey";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,

    /// JWT ID (unique identifier for the token, used as the revocation key)
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Builds claims for `subject` valid from `issued_at` for `lifetime`
    ///
    /// `exp` saturates instead of overflowing; `expires_at` then returns `None`.
    pub fn new(
        subject: impl Into<String>,
        jti: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: chrono::Duration,
    ) -> Self {
        Self {
            sub: subject.into(),
            jti: jti.into(),
            iat: issued_at.timestamp(),
            exp: issued_at.timestamp().saturating_add(lifetime.num_seconds()),
            iss: issuer.into(),
        }
    }

    /// Checks if the claims have expired at `now`
    ///
    /// A token is live while `now < exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiration as a timestamp, `None` if `exp` is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Issue time as a timestamp, `None` if `iat` is out of range
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }
}

/// A freshly minted token as handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Serialized signed token, opaque to clients
    pub token: String,

    /// JWT ID embedded in the token
    pub jti: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Seconds until expiry at issue time
    pub expires_in: i64,
}

impl AccessToken {
    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Denylist entry for a token revoked before its natural expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// JWT ID of the revoked token
    pub jti: String,

    /// Expiry copied from the token; the entry may be purged after this
    pub expires_at: DateTime<Utc>,

    /// When the revocation was recorded
    pub revoked_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Creates a revocation record stamped with the current time
    pub fn new(jti: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            jti: jti.into(),
            expires_at,
            revoked_at: Utc::now(),
        }
    }

    /// Whether the record can be purged at `now`
    pub fn is_purgeable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
