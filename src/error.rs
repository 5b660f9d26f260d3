//! Error types for the editing core.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for editing core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editing core operations.
///
/// Structural buffer operations never fail; errors only come from the
/// load boundary and from the storage/clipboard collaborators.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a storage collaborator.
    Io(io::Error),
    /// Loaded bytes are not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
    /// Path has no stored content.
    NotFound(PathBuf),
    /// Clipboard collaborator failure.
    Clipboard(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid UTF-8 after byte {valid_up_to}")
            }
            Self::NotFound(path) => write!(f, "no such document: {}", path.display()),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        }
    }
}
