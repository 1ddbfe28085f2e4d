//! Error types for arena_walk

use std::fmt;

/// Main error type for trajectory generation
#[derive(Debug)]
pub enum WalkError {
    /// Invalid parameter
    InvalidParameter(String),
    /// The boundary-rejection loop could not find an in-arena step
    RejectionBudgetExhausted {
        /// Index of the step that failed
        step: usize,
        /// Number of fresh headings drawn for that step
        attempts: usize,
    },
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            WalkError::RejectionBudgetExhausted { step, attempts } => write!(
                f,
                "Rejection budget exhausted: no in-arena position found for step {} after {} attempts",
                step, attempts
            ),
            WalkError::IoError(e) => write!(f, "I/O error: {}", e),
            WalkError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WalkError {
    fn from(e: std::io::Error) -> Self {
        WalkError::IoError(e)
    }
}

/// Result type alias for trajectory operations
pub type WalkResult<T> = Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalkError::InvalidParameter("sample_count must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: sample_count must be positive"
        );
    }

    #[test]
    fn test_rejection_budget_display() {
        let err = WalkError::RejectionBudgetExhausted { step: 3, attempts: 10 };
        let msg = format!("{}", err);
        assert!(msg.contains("step 3"));
        assert!(msg.contains("10 attempts"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WalkError = io_err.into();
        assert!(matches!(err, WalkError::IoError(_)));
    }
}
