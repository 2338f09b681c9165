//! A fixed-capacity vector value type for embedding in host applications.
//!
//! The crate provides [`Vector`], an up-to-four-component double-precision
//! vector with component-wise arithmetic, comparison, normalization,
//! swizzled field access and hex color decoding. Every operation that
//! modifies a vector comes as a mutating/non-mutating pair, with the
//! non-mutating form copying the receiver first.

#[macro_use]
mod macros;

mod direction;
mod error;
mod field;
mod hex;
mod vector;

pub use direction::Direction;
pub use error::{Result, VectorError};
pub use vector::Vector;

/// The maximum number of components a [`Vector`] can hold.
pub const MAX_COMPONENTS: usize = 4;
