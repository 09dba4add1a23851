//! Business services containing domain logic and use cases.

pub mod credential;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use credential::CredentialVerifier;
pub use session::{AuthSession, Authenticated, Authenticator, SessionService};
pub use token::{CleanupResult, RevocationCleanupService, TokenCodec, TokenCodecConfig};
