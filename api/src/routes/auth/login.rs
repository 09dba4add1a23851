use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::CredentialsRequest;
use crate::handlers::error::handle_domain_error;

use super::session_response;

/// Handler for POST /api/v1/auth/login
///
/// Same body as signup. The body is not format-validated here: any
/// mismatch, including a malformed email, is a plain 401.
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login(state: web::Data<AppState>, body: web::Json<CredentialsRequest>) -> HttpResponse {
    let request = body.into_inner();

    match state
        .sessions
        .login(&request.user.email, &request.user.password)
        .await
    {
        Ok(session) => session_response(&session, "Logged in successfully."),
        Err(error) => handle_domain_error(&error),
    }
}
