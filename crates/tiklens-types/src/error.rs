use std::fmt;

/// Result type for tiklens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Timestamp string matched none of the accepted formats
    InvalidTimestamp(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(raw) => write!(f, "Invalid timestamp: {}", raw),
        }
    }
}

impl std::error::Error for Error {}
