//! Error types for lattice_control_set

use std::fmt;

/// Main error type for control-set generation
#[derive(Debug)]
pub enum ControlSetError {
    /// Invalid parameter (non-positive sampling step, zero bins, ...)
    InvalidParameter(String),
    /// State with non-finite coordinates, heading or curvature
    InvalidState(String),
    /// Control-set file could not be parsed
    ParseError(String),
    /// I/O error
    IoError(std::io::Error),
}

impl fmt::Display for ControlSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlSetError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ControlSetError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            ControlSetError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ControlSetError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ControlSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControlSetError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlSetError {
    fn from(e: std::io::Error) -> Self {
        ControlSetError::IoError(e)
    }
}

/// Result type alias for control-set operations
pub type ControlSetResult<T> = Result<T, ControlSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ControlSetError::InvalidParameter("step must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: step must be positive");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ControlSetError = io_err.into();
        assert!(matches!(err, ControlSetError::IoError(_)));
    }
}
