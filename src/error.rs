//! Unified error types for sift.
//!
//! Induction is designed to tolerate sparse evidence: unresolvable
//! bindings and unknown fluents are absorbed locally (the literal is
//! simply not applicable there). Only structural corruption of the
//! input corpus is fatal, because a model induced from a corrupt trace
//! would be unsound.

use thiserror::Error;

/// The main error type for sift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// A transition's parameter count disagrees with the recorded arity
    /// for its action name. Indicates corrupt trace data; aborts the run.
    #[error("arity mismatch for action `{action}`: schema has {expected} parameters, transition has {found}")]
    SchemaArityMismatch {
        action: String,
        expected: usize,
        found: usize,
    },

    /// An action parameter object has no sort assignment. Only
    /// reachable with a caller-supplied sort map; inferred maps cover
    /// every observed object.
    #[error("object `{object}` of action `{action}` has no sort assignment")]
    UnknownObject { object: String, action: String },

    /// An action schema was mutated outside its accumulating phase.
    #[error("invalid phase: {message}")]
    InvalidPhase { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Serialization errors from the model output surface.
    #[error("serialization error: {message}")]
    Serde { message: String },
}

/// A specialized Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

impl SiftError {
    /// Create an arity mismatch error.
    pub fn arity_mismatch(action: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::SchemaArityMismatch {
            action: action.into(),
            expected,
            found,
        }
    }

    /// Create an unknown object error.
    pub fn unknown_object(object: impl Into<String>, action: impl Into<String>) -> Self {
        Self::UnknownObject {
            object: object.into(),
            action: action.into(),
        }
    }

    /// Create an invalid phase error.
    pub fn invalid_phase(message: impl Into<String>) -> Self {
        Self::InvalidPhase {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Check whether this error aborts the whole induction run.
    ///
    /// Structural input errors always do: a partially built model
    /// from a corrupt corpus or an incomplete sort map would be
    /// unsound.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::SchemaArityMismatch { .. } | Self::UnknownObject { .. }
        )
    }
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SiftError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_display() {
        let err = SiftError::arity_mismatch("pick-up", 1, 3);
        let msg = err.to_string();
        assert!(msg.contains("pick-up"));
        assert!(msg.contains("schema has 1"));
        assert!(msg.contains("transition has 3"));
    }

    #[test]
    fn test_invalid_phase_display() {
        let err = SiftError::invalid_phase("cannot accumulate after finalization");
        assert_eq!(
            err.to_string(),
            "invalid phase: cannot accumulate after finalization"
        );
    }

    #[test]
    fn test_config_display() {
        let err = SiftError::config("invalid TOML");
        assert_eq!(err.to_string(), "config error: invalid TOML");
    }

    #[test]
    fn test_unknown_object_display() {
        let err = SiftError::unknown_object("truck1", "drive");
        assert_eq!(
            err.to_string(),
            "object `truck1` of action `drive` has no sort assignment"
        );
    }

    #[test]
    fn test_only_structural_errors_are_fatal() {
        assert!(SiftError::arity_mismatch("a", 1, 2).is_fatal());
        assert!(SiftError::unknown_object("o", "a").is_fatal());
        assert!(!SiftError::invalid_phase("x").is_fatal());
        assert!(!SiftError::config("x").is_fatal());
        assert!(!SiftError::serde("x").is_fatal());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SiftError = json_err.into();
        assert!(matches!(err, SiftError::Serde { .. }));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: SiftError = toml_err.into();
        assert!(matches!(err, SiftError::Config { .. }));
    }
}
