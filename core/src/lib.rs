//! # Latchkey Core
//!
//! Core domain layer for the Latchkey backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. It has no knowledge of HTTP or of a particular database.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
