//! Repository interfaces for persistence, with in-memory implementations.
//!
//! Concrete database implementations live in the infrastructure crate.

pub mod account;
pub mod revocation;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use revocation::{InMemoryRevocationRepository, RevocationRepository};
