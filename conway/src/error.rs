//! Errors surfaced to whoever supplied bad input to the simulation.

use std::fmt;

use thiserror::Error;

/// Which side of the grid a dimension describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Caller-input validation failures. None of these are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Width or height was zero or negative.
    #[error("grid {axis} must be a positive integer, got {value}")]
    InvalidDimension { axis: Axis, value: i64 },

    /// The cell count overflows or cannot be allocated.
    #[error("a {width}x{height} grid is too large to allocate")]
    GridTooLarge { width: usize, height: usize },

    /// A negative number of generations was requested.
    #[error("generation count must not be negative, got {0}")]
    InvalidGenerationCount(i64),

    /// A coordinate outside the grid was addressed.
    #[error("cell ({row}, {col}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
