//! # Latchkey API
//!
//! Actix-web surface over the core session service.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
