use std::collections::BTreeMap;

use crate::constants::NON_FIELD_ERRORS_KEY;

#[derive(Debug, thiserror::Error)]
pub enum HealthHelpError {
    #[error("Available beds cannot exceed total beds.")]
    BedsExceedTotal,
    #[error("invalid value at {path}: {message}")]
    Field { path: String, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to serialize representation: {0}")]
    Serialization(serde_json::Error),
}

impl HealthHelpError {
    /// Whether this error was caused by the caller's data rather than by the server.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::BedsExceedTotal | Self::Field { .. })
    }

    /// Render the error as a field-name to messages map.
    ///
    /// Field errors are keyed by their JSON path, everything else by `non_field_errors`.
    pub fn detail(&self) -> BTreeMap<String, Vec<String>> {
        let mut detail = BTreeMap::new();
        match self {
            Self::Field { path, message } => {
                detail.insert(path.clone(), vec![message.clone()]);
            }
            other => {
                detail.insert(NON_FIELD_ERRORS_KEY.to_string(), vec![other.to_string()]);
            }
        }
        detail
    }
}

pub type HealthHelpResult<T> = std::result::Result<T, HealthHelpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beds_error_is_a_non_field_error() {
        let detail = HealthHelpError::BedsExceedTotal.detail();
        assert_eq!(
            detail.get(NON_FIELD_ERRORS_KEY),
            Some(&vec!["Available beds cannot exceed total beds.".to_string()])
        );
    }

    #[test]
    fn field_error_is_keyed_by_path() {
        let err = HealthHelpError::Field {
            path: "total_beds".into(),
            message: "invalid type".into(),
        };
        assert!(err.is_validation());
        assert_eq!(
            err.detail().get("total_beds"),
            Some(&vec!["invalid type".to_string()])
        );
    }

    #[test]
    fn config_errors_are_not_validation_errors() {
        assert!(!HealthHelpError::InvalidInput("bad".into()).is_validation());
    }
}
