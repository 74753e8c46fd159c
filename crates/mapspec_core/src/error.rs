//! Core error types for MAPSPEC.

use std::fmt;

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid model ID format
    InvalidModelId {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid encoding of model content
    InvalidEncoding {
        /// Decoder message
        message: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModelId { input, reason } => {
                write!(f, "Invalid model ID '{}': {}", input, reason)
            }
            Self::InvalidEncoding { message } => write!(f, "Invalid encoding: {}", message),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEncoding {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidModelId {
            input: "com.acme".to_string(),
            reason: "expected namespace:name:version".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid model ID 'com.acme': expected namespace:name:version"
        );

        let err = CoreError::InvalidEncoding {
            message: "EOF while parsing".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid encoding: EOF while parsing");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::from(json_err);
        assert!(matches!(err, CoreError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_equality() {
        let err1 = CoreError::InvalidEncoding {
            message: "x".to_string(),
        };
        let err2 = CoreError::InvalidEncoding {
            message: "x".to_string(),
        };
        assert_eq!(err1, err2);

        let err3 = CoreError::InvalidModelId {
            input: "x".to_string(),
            reason: "y".to_string(),
        };
        assert_ne!(err1, err3);
    }
}
