//! # API REST
//!
//! REST API implementation for HealthHelp.
//!
//! Handles:
//! - HTTP endpoints with axum that expose the record mappers and input validators
//! - building a request context (scheme, host, path) from each inbound request
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, status codes)
//!
//! Uses `healthhelp-core` for the mapping itself and `api-shared` for common types.

#![warn(rust_2018_idioms)]

mod request;
mod routes;

pub use request::request_context;
pub use routes::{router, ApiDoc, AppState};
