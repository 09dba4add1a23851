//! Token handling: JWT encoding/decoding and revocation cleanup

mod cleanup;
mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, RevocationCleanupService};
pub use codec::TokenCodec;
pub use config::TokenCodecConfig;
