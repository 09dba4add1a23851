//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, runs it through
//! the registered `Authenticator` and injects an `AuthContext` into the
//! request. Every rejection gets the same 401 body.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use lk_core::{
    domain::entities::{account::Account, token::Claims},
    errors::DomainError,
    services::{Authenticated, Authenticator},
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::{handle_domain_error, unauthorized};

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Account the token belongs to
    pub account: Account,
    /// Verified token claims
    pub claims: Claims,
}

impl From<Authenticated> for AuthContext {
    fn from(authenticated: Authenticated) -> Self {
        Self {
            account: authenticated.account,
            claims: authenticated.claims,
        }
    }
}

/// JWT authentication middleware factory
///
/// Requires a `web::Data<dyn Authenticator>` in app data.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(req.headers()) {
                Some(token) => token.to_owned(),
                None => {
                    tracing::debug!("Request rejected: missing bearer token");
                    return Ok(reject(req, unauthorized()));
                }
            };

            let authenticator = match req.app_data::<web::Data<dyn Authenticator>>() {
                Some(authenticator) => authenticator.clone(),
                None => {
                    let error = DomainError::internal("No authenticator registered in app data");
                    return Ok(reject(req, handle_domain_error(&error)));
                }
            };

            let authenticated = match authenticator.authenticate(&token).await {
                Ok(authenticated) => authenticated,
                Err(error) => return Ok(reject(req, handle_domain_error(&error))),
            };

            req.extensions_mut().insert(AuthContext::from(authenticated));

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Short-circuit the chain with a prepared response
fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    req.into_response(response).map_into_right_body()
}

/// Extracts the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
