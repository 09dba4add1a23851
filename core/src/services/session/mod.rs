//! Session orchestration: register, login, authenticate and logout
//!
//! Sessions are stateless signed tokens. The only server-side state is the
//! denylist of tokens revoked by logout.

mod service;

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;

pub use service::{AuthSession, Authenticated, Authenticator, SessionService};
