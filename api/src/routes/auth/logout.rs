use actix_web::{web, HttpRequest, HttpResponse};
use lk_core::errors::{AuthError, DomainError};

use crate::app::AppState;
use crate::dto::auth::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;

/// Handler for DELETE /api/v1/auth/logout
///
/// Revokes the presented token. Not wrapped in `JwtAuth` because a missing
/// or dead token gets its own message here.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Logged out successfully." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: "Couldn't find an active session."
/// - 500 Internal Server Error: The revocation could not be stored
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let token = match extract_bearer_token(req.headers()) {
        Some(token) => token,
        None => return handle_domain_error(&DomainError::Auth(AuthError::NoActiveSession)),
    };

    match state.sessions.logout(token).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Logged out successfully.".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
