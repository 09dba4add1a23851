//! CORS middleware configuration for cross-origin requests.
//!
//! The `Authorization` response header is exposed so browser clients can
//! read the token issued by signup and login.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use lk_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// An origin list containing `*` allows any origin; an empty list allows
/// none.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers(vec![header::AUTHORIZATION])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("CORS allows any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            tracing::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_rt::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(CorsConfig::development(), "http://anywhere.test").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_configured_origins_only() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.latchkey.test".to_string()],
            ..CorsConfig::default()
        };

        assert_eq!(
            preflight(config.clone(), "https://app.latchkey.test").await,
            StatusCode::OK
        );
        assert_ne!(
            preflight(config, "https://evil.test").await,
            StatusCode::OK
        );
    }
}
