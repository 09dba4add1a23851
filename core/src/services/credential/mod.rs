//! Credential verification and password hashing
//!
//! Passwords are hashed with bcrypt. Lookups for unknown identifiers still
//! pay for a full bcrypt comparison so they cannot be told apart from a
//! wrong password by timing or by error.

mod verifier;

#[cfg(test)]
#[path = "tests/verifier_tests.rs"]
mod tests;

pub use verifier::{CredentialVerifier, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
