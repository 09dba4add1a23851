//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use lk_api::app::AppState;
use lk_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryRevocationRepository,
    RevocationRepository,
};
use lk_core::services::{CredentialVerifier, SessionService, TokenCodec, TokenCodecConfig};
use lk_core::services::credential::MIN_BCRYPT_COST;
use serde_json::json;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Session service over in-memory stores, plus handles on those stores
pub struct TestContext {
    pub sessions: Arc<SessionService>,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub revocations: Arc<InMemoryRevocationRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let revocations = Arc::new(InMemoryRevocationRepository::new());
        Self::with_revocations(accounts, revocations.clone(), revocations)
    }

    /// Build with a custom revocation store wired into the service
    pub fn with_revocations(
        accounts: Arc<InMemoryAccountRepository>,
        store: Arc<dyn RevocationRepository>,
        revocations: Arc<InMemoryRevocationRepository>,
    ) -> Self {
        let account_repo: Arc<dyn AccountRepository> = accounts.clone();
        let verifier = CredentialVerifier::new(account_repo.clone(), MIN_BCRYPT_COST).unwrap();
        let codec = TokenCodec::new(TokenCodecConfig::new(TEST_SECRET)).unwrap();

        Self {
            sessions: Arc::new(SessionService::new(account_repo, store, verifier, codec)),
            accounts,
            revocations,
        }
    }

    pub fn state(&self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.sessions.clone()))
    }
}

pub fn credentials(email: &str, password: &str) -> serde_json::Value {
    json!({ "user": { "email": email, "password": password } })
}

/// Value of the `Authorization` response header
pub fn authorization_header<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
