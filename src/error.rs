//! Validation errors raised while constructing grids and rovers.

use thiserror::Error;

/// Everything that can go wrong while building a simulation from text.
///
/// All variants are local validation failures raised synchronously from the
/// constructing operation; nothing here is transient or retryable. A failed
/// construction leaves no partially-built grid or rover behind.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The grid text does not reduce to two whitespace-separated
    /// non-negative integers.
    #[error("the grid's size must be 2 non-negative integers")]
    InvalidGridSpec,

    /// The rover text does not match the `(x, y, H) FRL...` pattern.
    #[error("the rover's input was formatted incorrectly")]
    InvalidRoverSpec,

    /// The parsed starting position lies outside the grid bounds.
    #[error("the rover can't be placed outside the grid")]
    OutOfBounds,
}
