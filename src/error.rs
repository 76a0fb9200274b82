//! Error types for the skeleton library

use thiserror::Error;

/// Errors returned by the library functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller supplied a value outside the accepted domain
    #[error("Data must be a list or dictionary")]
    InvalidArgument,
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
