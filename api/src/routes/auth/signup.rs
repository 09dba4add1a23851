use actix_web::{web, HttpResponse};
use lk_core::domain::entities::account::Account;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::CredentialsRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::session_response;

/// Handler for POST /api/v1/auth/signup
///
/// # Request
///
/// ```json
/// { "user": { "email": "a@x.com", "password": "pw123456" } }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// `Authorization: Bearer {token}` header and
/// ```json
/// { "message": "Signed up successfully.", "user": { "id": "...", "email": "a@x.com", "created_at": "..." } }
/// ```
///
/// Surrounding whitespace in the email is dropped before validation, the
/// same as login does.
///
/// ## Errors
/// - 400 Bad Request: Invalid email or blank password
/// - 409 Conflict: Email already registered
pub async fn signup(state: web::Data<AppState>, body: web::Json<CredentialsRequest>) -> HttpResponse {
    let mut request = body.into_inner();
    request.user.email = Account::normalize_email(&request.user.email);

    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .sessions
        .register(&request.user.email, &request.user.password)
        .await
    {
        Ok(session) => session_response(&session, "Signed up successfully."),
        Err(error) => handle_domain_error(&error),
    }
}
