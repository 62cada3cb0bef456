//! Result and Error types for the pgm module

// crate modules
use crate::volume::Dimensions;

/// Type alias for `Result<T, pgm::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `voltools-pgm`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Format code line is not ASCII or has no tokens
    #[error("only unsigned char supported (format code line {0:?})")]
    UnsupportedFormat(String),

    /// Dimensions are not three non-negative integers, or overflow a `usize`
    #[error("failed to parse dimensions from {0:?}")]
    InvalidDimensions(String),

    /// Unexpected number of sample bytes for the dimensions
    #[error("unexpected byte length (expected {expected:?}, found {found:?})")]
    UnexpectedByteLength { expected: usize, found: usize },

    /// Voxel coordinates outside of the volume
    #[error("voxel ({x}, {y}, {z}) is outside of the {dimensions} volume")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        dimensions: Dimensions,
    },
}
