//! Constants used throughout the HealthHelp core crate.
//!
//! Defaults for startup configuration and the keys used when rendering validation errors.

/// Base URL prepended to a file location when no request context is available.
pub const DEFAULT_FALLBACK_BASE_URL: &str = "https://healthhelp-backend.onrender.com/";

/// Scheme used for absolute URLs when a request does not say which scheme it arrived on.
pub const DEFAULT_SCHEME: &str = "http";

/// Error-map key for failures that are not tied to a single field.
pub const NON_FIELD_ERRORS_KEY: &str = "non_field_errors";

/// Error-map key used when a type error has no field path.
pub const ROOT_ERROR_PATH: &str = "<root>";
