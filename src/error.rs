//! Error types and handling for IconMill

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for IconMill operations
pub type Result<T> = std::result::Result<T, IconMillError>;

/// Main error type for IconMill operations
#[derive(Debug, Error)]
pub enum IconMillError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode, resample or encode errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// The source image path does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// A request field violated the non-empty invariant
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl IconMillError {
    /// Create a new input-not-found error
    pub fn input_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Whether this error is the missing-input gate rather than a
    /// processing failure
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    /// Get a user-friendly error message
    ///
    /// Open, decode, resize and write failures all collapse into one
    /// "failed to process" report carrying the underlying message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Failed to process image: {e}"),
            Self::Image(e) => format!("Failed to process image: {e}"),
            Self::InputNotFound { path } => {
                format!("Input file not found: {}", path.display())
            }
            Self::InvalidRequest { message } => message.clone(),
        }
    }
}
