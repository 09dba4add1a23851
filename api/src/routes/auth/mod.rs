//! Authentication route handlers
//!
//! Signup and login return the token in the `Authorization` response header
//! and the account in the body.

pub mod login;
pub mod logout;
pub mod signup;

use actix_web::{http::header::AUTHORIZATION, HttpResponse};
use lk_core::services::AuthSession;

use crate::dto::auth::{AccountView, SessionResponse};

/// 200 response carrying a freshly issued token
fn session_response(session: &AuthSession, message: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((AUTHORIZATION, session.token.bearer()))
        .json(SessionResponse {
            message: message.to_string(),
            user: AccountView::from(&session.account),
        })
}
