//! MySQL repository implementations

mod account_repository_impl;
mod revocation_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use revocation_repository_impl::MySqlRevocationRepository;
