//! Input validation utilities.
//!
//! Inbound data goes through two passes:
//! 1. type/presence checks implied by the input struct's field declarations (serde);
//! 2. cross-field rules from the input's [`Validate`] implementation.
//!
//! This module also holds the guardrails applied to configuration values at startup.

use serde::de::DeserializeOwned;

use crate::constants::ROOT_ERROR_PATH;
use crate::{HealthHelpError, HealthHelpResult};

/// Cross-field validation run after an input has deserialized successfully.
///
/// The default implementation accepts everything, which is right for inputs whose only
/// constraints are the ones expressed by their types.
pub trait Validate: Sized {
    fn validate(self) -> HealthHelpResult<Self> {
        Ok(self)
    }
}

/// Parse and validate a JSON candidate for input type `T`.
///
/// Type and presence failures are reported as [`HealthHelpError::Field`] with the JSON path
/// of the offending value (found with `serde_path_to_error`). A missing required field is
/// reported under its own name.
///
/// # Errors
///
/// Returns [`HealthHelpError::Field`] for malformed input, or whatever `T::validate` returns.
pub fn parse_input<T>(json: &str) -> HealthHelpResult<T>
where
    T: DeserializeOwned + Validate,
{
    let mut deserializer = serde_json::Deserializer::from_str(json);

    let input: T = match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            return Err(field_error(&path, &source.to_string()));
        }
    };

    deserializer
        .end()
        .map_err(|e| field_error("", &e.to_string()))?;

    input.validate()
}

fn field_error(path: &str, message: &str) -> HealthHelpError {
    let parent = match path {
        "" | "." => None,
        p => Some(p),
    };

    // serde reports a missing field at the path of the containing object.
    if let Some(rest) = message.strip_prefix("missing field `") {
        if let Some(name) = rest.split('`').next() {
            let path = match parent {
                Some(p) => format!("{p}.{name}"),
                None => name.to_string(),
            };
            return HealthHelpError::Field {
                path,
                message: "This field is required.".into(),
            };
        }
    }

    HealthHelpError::Field {
        path: parent.unwrap_or(ROOT_ERROR_PATH).to_string(),
        message: message.to_string(),
    }
}

/// Validates that a base URL is usable as a prefix for file locations.
///
/// # Errors
///
/// Returns `HealthHelpError::InvalidInput` if the URL is empty, non-ASCII, contains
/// whitespace, or does not start with `http://` or `https://`.
pub fn validate_base_url(base_url: &str) -> HealthHelpResult<()> {
    if base_url.trim().is_empty() {
        return Err(HealthHelpError::InvalidInput(
            "base URL cannot be empty".into(),
        ));
    }

    if !base_url.is_ascii() {
        return Err(HealthHelpError::InvalidInput(
            "base URL must contain only ASCII characters".into(),
        ));
    }

    if base_url.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
        return Err(HealthHelpError::InvalidInput(
            "base URL cannot contain whitespace or control characters".into(),
        ));
    }

    let host = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"));

    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        Some(_) => Err(HealthHelpError::InvalidInput(
            "base URL must include a host".into(),
        )),
        None => Err(HealthHelpError::InvalidInput(
            "base URL must start with http:// or https://".into(),
        )),
    }
}

/// Validates a URL scheme used for building absolute URLs.
///
/// # Errors
///
/// Returns `HealthHelpError::InvalidInput` unless the scheme is `http` or `https`.
pub fn validate_scheme(scheme: &str) -> HealthHelpResult<()> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(HealthHelpError::InvalidInput(format!(
            "unsupported scheme '{other}' (expected http or https)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Sample {
        name: String,
        count: u32,
        #[serde(default)]
        nested: Option<Nested>,
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Nested {
        label: String,
    }

    impl Validate for Sample {}

    fn expect_field(err: HealthHelpError) -> (String, String) {
        match err {
            HealthHelpError::Field { path, message } => (path, message),
            other => panic!("expected Field error, got {other:?}"),
        }
    }

    #[test]
    fn parses_valid_input() {
        let sample: Sample = parse_input(r#"{"name": "a", "count": 3}"#).expect("valid");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let err = parse_input::<Sample>(r#"{"count": 3}"#).expect_err("missing name");
        let (path, message) = expect_field(err);
        assert_eq!(path, "name");
        assert_eq!(message, "This field is required.");
    }

    #[test]
    fn missing_nested_field_includes_parent_path() {
        let err = parse_input::<Sample>(r#"{"name": "a", "count": 1, "nested": {}}"#)
            .expect_err("missing nested label");
        let (path, _) = expect_field(err);
        assert_eq!(path, "nested.label");
    }

    #[test]
    fn wrong_type_is_reported_at_its_path() {
        let err = parse_input::<Sample>(r#"{"name": "a", "count": -1}"#).expect_err("negative");
        let (path, _) = expect_field(err);
        assert_eq!(path, "count");
    }

    #[test]
    fn non_object_is_reported_at_root() {
        let err = parse_input::<Sample>(r#""just a string""#).expect_err("not an object");
        let (path, _) = expect_field(err);
        assert_eq!(path, ROOT_ERROR_PATH);
    }

    #[test]
    fn trailing_characters_are_rejected() {
        let err = parse_input::<Sample>(r#"{"name": "a", "count": 1} x"#).expect_err("trailing");
        let (path, _) = expect_field(err);
        assert_eq!(path, ROOT_ERROR_PATH);
    }

    #[test]
    fn base_url_guardrails() {
        assert!(validate_base_url("https://healthhelp-backend.onrender.com/").is_ok());
        assert!(validate_base_url("http://localhost:8000").is_ok());
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("ftp://example.com/").is_err());
        assert!(validate_base_url("https://").is_err());
        assert!(validate_base_url("https://exa mple.com/").is_err());
    }

    #[test]
    fn scheme_guardrails() {
        assert!(validate_scheme("http").is_ok());
        assert!(validate_scheme("https").is_ok());
        assert!(validate_scheme("HTTPS").is_err());
    }
}
