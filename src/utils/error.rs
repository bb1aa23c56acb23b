// src/utils/error.rs

//! The crate-wide error type and `Result` alias.
//!
//! Every fallible operation in the library reports one of the variants below.
//! Errors are always recoverable by the caller: a failed transform or save
//! leaves the named-image registry exactly as it was.

use thiserror::Error;

/// The primary error type for all operations in the raster editor library.
#[derive(Error, Debug)]
pub enum RasterError {
    /// An underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named image was requested that the registry does not hold.
    #[error("no image named '{0}' is loaded")]
    NotFound(String),

    /// Images that must agree in size do not.
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A parameter is outside its valid range, or a command is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A decoder rejected a file, or a path has an unsupported extension.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<image::ImageError> for RasterError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => RasterError::Io(io),
            other => RasterError::InvalidFormat(other.to_string()),
        }
    }
}

/// A specialized `Result` type for raster editor operations.
pub type Result<T> = std::result::Result<T, RasterError>;
