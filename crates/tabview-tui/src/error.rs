//! Error types for the tabview binary.

use std::io;

use tabview_core::AppError;
use thiserror::Error;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Loading data or settings failed.
    #[error("{0}")]
    Core(#[from] AppError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

impl TuiError {
    /// Hint printed under the error, when one is known.
    pub fn hint(&self) -> Option<String> {
        match self {
            TuiError::Core(err) => err.troubleshooting_hint(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabview_core::error::DataError;

    #[test]
    fn test_core_error_passes_message_through() {
        let err: TuiError = AppError::from(DataError::UnknownColumn {
            name: "NOPE".to_string(),
        })
        .into();
        assert_eq!(format!("{}", err), "DataError: Unknown column 'NOPE'");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_io_error() {
        let err: TuiError = io::Error::other("closed").into();
        assert!(format!("{}", err).starts_with("Terminal error"));
    }
}
