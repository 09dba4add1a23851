//! Application state and factory
//!
//! Builds the Actix-web application around an already constructed
//! `SessionService`, so the binary and the integration tests share one
//! routing table.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, HttpResponse,
};
use lk_core::services::{Authenticator, SessionService};
use lk_shared::{CorsConfig, ServerConfig};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::bad_request;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{
    auth::{login::login, logout::logout, signup::signup},
    members::member_data,
};

/// Shared state available to every handler
pub struct AppState {
    /// Session orchestration
    pub sessions: Arc<SessionService>,
    /// Maximum accepted JSON body size in bytes
    pub max_payload_size: usize,
}

impl AppState {
    /// Create state with the default payload limit
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self {
            sessions,
            max_payload_size: ServerConfig::default().max_payload_size,
        }
    }

    /// Set the maximum JSON body size
    pub fn with_max_payload_size(mut self, bytes: usize) -> Self {
        self.max_payload_size = bytes;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let authenticator: Arc<dyn Authenticator> = state.sessions.clone();

    let json_config = web::JsonConfig::default()
        .limit(state.max_payload_size)
        .error_handler(|err, _req| {
            let response = bad_request(err.to_string());
            InternalError::from_response(err, response).into()
        });

    App::new()
        .app_data(state)
        .app_data(web::Data::from(authenticator))
        .app_data(json_config)
        // Outermost last: tracing spans wrap CORS handling
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup))
                        .route("/login", web::post().to(login))
                        .route("/logout", web::delete().to(logout)),
                )
                .route(
                    "/member-data",
                    web::get().to(member_data).wrap(JwtAuth::new()),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "latchkey-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Latchkey API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/v1/auth/signup",
                    "method": "POST",
                    "request_body": { "user": { "email": "string", "password": "string" } },
                    "responses": {
                        "200": "Account created; token in the Authorization header",
                        "400": "Invalid email or blank password",
                        "409": "Email already registered"
                    }
                },
                "login": {
                    "path": "/api/v1/auth/login",
                    "method": "POST",
                    "request_body": { "user": { "email": "string", "password": "string" } },
                    "responses": {
                        "200": "Token in the Authorization header",
                        "401": "Invalid email or password"
                    }
                },
                "logout": {
                    "path": "/api/v1/auth/logout",
                    "method": "DELETE",
                    "requires_auth": true,
                    "responses": {
                        "200": "Token revoked",
                        "401": "No active session"
                    }
                }
            },
            "member_data": {
                "path": "/api/v1/member-data",
                "method": "GET",
                "requires_auth": true
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(lk_shared::ErrorResponse::new(
        lk_shared::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
