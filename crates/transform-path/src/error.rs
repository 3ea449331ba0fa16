//! Error types for transform path construction and key derivation.

/// Transform path errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformPathError {
    /// A token supplied as source id or step is not a plain text value.
    #[error("invalid step at index {index}: {reason}")]
    Validation { index: usize, reason: String },

    /// Digest truncation length outside the supported range.
    #[error("truncation length must be an integer in [1, 32], got {requested}")]
    Range { requested: String },

    /// Key configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl TransformPathError {
    pub(crate) fn validation(index: usize, reason: impl Into<String>) -> Self {
        Self::Validation {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn range(requested: impl ToString) -> Self {
        Self::Range {
            requested: requested.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether a token was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether a truncation length was rejected.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

/// Result type for transform path operations.
pub type TransformPathResult<T> = Result<T, TransformPathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformPathError::validation(2, "expected a string, got null");
        assert_eq!(
            err.to_string(),
            "invalid step at index 2: expected a string, got null"
        );

        let err = TransformPathError::range(33);
        assert!(err.to_string().contains("got 33"));

        let err = TransformPathError::config("bad yaml");
        assert_eq!(err.to_string(), "configuration error: bad yaml");
    }

    #[test]
    fn test_error_classification() {
        assert!(TransformPathError::validation(0, "x").is_validation());
        assert!(!TransformPathError::validation(0, "x").is_range());
        assert!(TransformPathError::range(-1).is_range());
        assert!(!TransformPathError::config("x").is_validation());
    }
}
