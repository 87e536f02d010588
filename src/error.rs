//! Error type shared by the whole crate.
//!
//! Every variant is a caller contract violation: the puzzle core has no I/O
//! and no transient failures, so the same inputs always fail the same way.

use crate::cube::{MAX_SIZE, MIN_SIZE};

/// Errors returned when a caller passes an input outside the puzzle's domain.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("cube size {0} is out of range (must be between {MIN_SIZE} and {MAX_SIZE})")]
    InvalidSize(usize),
    #[error("axis {0} is out of range (must be 0, 1, or 2)")]
    InvalidAxis(usize),
    #[error("direction {0} is out of range (must be 0 or 1)")]
    InvalidDirection(usize),
    #[error("coordinate ({i}, {j}, {k}) is outside a cube of size {size}")]
    OutOfBounds {
        i: usize,
        j: usize,
        k: usize,
        size: usize,
    },
    #[error("layer mask has {got} layers but the cube has {expected}")]
    LayerMaskLength { expected: usize, got: usize },
    #[error("layer {layer} is outside a mask of {count} layers")]
    InvalidLayer { layer: usize, count: usize },
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    #[error("invalid turn {0:?}")]
    InvalidTurn(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = CubeError> = std::result::Result<T, E>;
