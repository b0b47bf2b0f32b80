//! Global error handling for treedump
//!
//! Every filesystem operation in the crate returns [`Result`], so failures
//! reach the caller instead of tearing down the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for treedump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// The root to scan is missing or not a directory
    #[error("Invalid root directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// The output document could not be created or truncated
    #[error("Failed to create output file {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input file could not be opened or decoded as text
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output document failed
    #[error("Failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for treedump operations
pub type Result<T> = std::result::Result<T, DumpError>;

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets `?` lift a DumpError into io::Result-returning callers
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        io::Error::other(err.to_string())
    }
}
