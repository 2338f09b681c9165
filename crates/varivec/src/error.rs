//! Errors reported by vector operations.

use crate::MAX_COMPONENTS;
use thiserror::Error;

/// Result type for fallible vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// An error reported by a vector operation.
///
/// All errors are reported synchronously to the immediate caller at the
/// point of violation; the engine never retries or recovers on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// More components were supplied at construction than a vector can hold.
    #[error("Got {count} components, expected at most {MAX_COMPONENTS}")]
    TooManyComponents { count: usize },

    /// A hex color string had an odd number of digits.
    #[error("Hex length should be divisible by 2, got {len}")]
    OddHexLength { len: usize },

    /// A hex color string contained a character that is not a hex digit.
    #[error("Unable to parse the hex '{hex}'")]
    MalformedHex { hex: String },

    /// A hex color string encoded more bytes than a vector can hold.
    #[error("Hex value '{hex}' too big")]
    HexTooBig { hex: String },

    /// A positional component access was out of range.
    #[error("Component index {index} is out of range for a vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A named field access used an unrecognized name or a name whose slot
    /// lies beyond the vector's length.
    #[error("Cannot access field '{field}' on a vector of length {len}")]
    InvalidField { field: char, len: usize },

    /// A swizzle pattern named more components than a vector can hold.
    #[error("Maximal allowed swizzle length is {MAX_COMPONENTS}, got {len}")]
    SwizzleTooLong { len: usize },

    /// A binary operation was applied to vectors of different lengths.
    #[error("Argument vectors have different lengths {len} and {other_len}")]
    LengthMismatch { len: usize, other_len: usize },

    /// Axis-snap normalization was applied to a vector that is not 2-D.
    #[error("Axis-snap normalization works only with two-dimensional vectors, got {len}")]
    NotTwoDimensional { len: usize },

    /// Axis-snap normalization was applied to the zero vector.
    #[error("Can not normalize zero vector")]
    CannotNormalizeZeroVector,
}
