//! Guard failure types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categorized failure raised by a guard function.
///
/// Every variant carries the name of the offending parameter and a
/// human-readable message built from the parameter's description. Failures
/// are raised at the point of detection and propagate to the caller
/// unchanged; nothing is recovered or batched internally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GuardError {
    /// A required value, sequence, or sequence element was absent.
    #[error("{name}: {message}")]
    NullArgument { name: String, message: String },

    /// A value violated a structural constraint, such as an empty string or
    /// sequence, a non-positive count, or a length exceeding a maximum.
    #[error("{name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// A numeric identifier fell outside its valid domain.
    #[error("{name}: {message}")]
    OutOfRange { name: String, message: String },
}

impl GuardError {
    pub(crate) fn null(name: &str, message: impl Into<String>) -> Self {
        GuardError::NullArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        GuardError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(name: &str, message: impl Into<String>) -> Self {
        GuardError::OutOfRange {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Name of the parameter the failure refers to.
    pub fn parameter(&self) -> &str {
        match self {
            Self::NullArgument { name, .. }
            | Self::InvalidArgument { name, .. }
            | Self::OutOfRange { name, .. } => name,
        }
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::OutOfRange { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_parameter_and_message() {
        let err = GuardError::null("config", "config cannot be null");
        assert_eq!(err.to_string(), "config: config cannot be null");
    }

    #[test]
    fn accessors_cover_all_variants() {
        let errors = [
            GuardError::null("a", "absent"),
            GuardError::invalid("b", "empty"),
            GuardError::out_of_range("c", "too small"),
        ];

        let names: Vec<_> = errors.iter().map(GuardError::parameter).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let messages: Vec<_> = errors.iter().map(GuardError::message).collect();
        assert_eq!(messages, ["absent", "empty", "too small"]);
    }

    #[test]
    fn error_serializes_correctly() {
        let err = GuardError::invalid("items", "items cannot be empty");
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: GuardError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
