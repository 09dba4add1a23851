//! Mapping of domain errors to HTTP responses
//!
//! Rejections are deliberately vague on the wire. The specific reason is
//! logged instead.

use actix_web::HttpResponse;
use lk_core::errors::{AuthError, DomainError};
use lk_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Message returned for every authentication rejection
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Message returned when logout finds no valid token
pub const NO_ACTIVE_SESSION_MESSAGE: &str = "Couldn't find an active session.";

/// Generic 401 response
pub fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        error_codes::UNAUTHORIZED,
        UNAUTHORIZED_MESSAGE,
    ))
}

/// 400 response for a request body that could not be parsed
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message))
}

/// Convert a domain error into the response the client sees
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    if error.is_unauthorized() {
        tracing::debug!("Request rejected: {}", error);
        return unauthorized();
    }

    match error {
        DomainError::Auth(AuthError::NoActiveSession) => HttpResponse::Unauthorized().json(
            ErrorResponse::new(error_codes::UNAUTHORIZED, NO_ACTIVE_SESSION_MESSAGE),
        ),
        DomainError::Auth(AuthError::DuplicateIdentifier) => HttpResponse::Conflict().json(
            ErrorResponse::new(error_codes::DUPLICATE_IDENTIFIER, "Email has already been taken"),
        ),
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        // Internal, GenerationFailed
        _ => internal_error(error),
    }
}

/// 400 response listing the fields that failed validation
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request");

    for (field, messages) in collect_field_errors(errors, None) {
        response = response.add_detail(field, messages);
    }

    HttpResponse::BadRequest().json(response)
}

fn internal_error(error: &DomainError) -> HttpResponse {
    tracing::error!("Internal error: {}", error);
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        error_codes::INTERNAL_ERROR,
        "An internal error occurred",
    ))
}

/// Flatten nested validation errors into `user.email`-style keys
fn collect_field_errors(errors: &ValidationErrors, prefix: Option<&str>) -> Vec<(String, Vec<String>)> {
    use validator::ValidationErrorsKind;

    let mut fields = Vec::new();

    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                fields.push((key, messages));
            }
            ValidationErrorsKind::Struct(nested) => {
                fields.extend(collect_field_errors(nested, Some(&key)));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_key = format!("{}[{}]", key, index);
                    fields.extend(collect_field_errors(nested, Some(&item_key)));
                }
            }
        }
    }

    fields.sort();
    fields
}
