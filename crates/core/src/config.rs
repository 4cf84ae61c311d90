//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the mappers. Environment variables are read by the binary, never during
//! request handling.

use crate::constants::{DEFAULT_FALLBACK_BASE_URL, DEFAULT_SCHEME};
use crate::validation::{validate_base_url, validate_scheme};
use crate::{HealthHelpError, HealthHelpResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    fallback_base_url: String,
    default_scheme: String,
    trust_forwarded_headers: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `HealthHelpError::InvalidInput` if the fallback base URL or the scheme fail
    /// their guardrails.
    pub fn new(fallback_base_url: String, default_scheme: String) -> HealthHelpResult<Self> {
        validate_base_url(&fallback_base_url)?;
        validate_scheme(&default_scheme)?;

        Ok(Self {
            fallback_base_url,
            default_scheme,
            trust_forwarded_headers: false,
        })
    }

    /// Honour `X-Forwarded-Host` and `X-Forwarded-Proto`. Only enable behind a proxy that
    /// overwrites them.
    pub fn with_trusted_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    /// Base URL that file locations are appended to when there is no request context.
    pub fn fallback_base_url(&self) -> &str {
        &self.fallback_base_url
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    pub fn trust_forwarded_headers(&self) -> bool {
        self.trust_forwarded_headers
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            fallback_base_url: DEFAULT_FALLBACK_BASE_URL.to_string(),
            default_scheme: DEFAULT_SCHEME.to_string(),
            trust_forwarded_headers: false,
        }
    }
}

/// Resolve the fallback base URL from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns the built-in default.
pub fn fallback_base_url_from_env_value(value: Option<String>) -> HealthHelpResult<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(url) => {
            validate_base_url(&url)?;
            Ok(url)
        }
        None => Ok(DEFAULT_FALLBACK_BASE_URL.to_string()),
    }
}

/// Resolve the default scheme from an optional environment value.
///
/// Matching is case-insensitive; `None` or empty falls back to `http`.
pub fn default_scheme_from_env_value(value: Option<String>) -> HealthHelpResult<String> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value {
        Some(scheme) => {
            validate_scheme(&scheme)?;
            Ok(scheme)
        }
        None => Ok(DEFAULT_SCHEME.to_string()),
    }
}

/// Resolve the forwarded-headers switch from an optional environment value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` (case-insensitive); `None` or empty is `false`.
///
/// # Errors
///
/// Returns `HealthHelpError::InvalidInput` for any other value.
pub fn trust_forwarded_headers_from_env_value(value: Option<String>) -> HealthHelpResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None | Some("false" | "0" | "no") => Ok(false),
        Some("true" | "1" | "yes") => Ok(true),
        Some(other) => Err(HealthHelpError::InvalidInput(format!(
            "invalid boolean '{other}' for forwarded-headers switch"
        ))),
    }
}
