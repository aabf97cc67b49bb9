//! Conway's Game of Life on a fixed-size, non-wrapping grid.
//!
//! A [`Grid`] owns every [`Cell`]; a [`Driver`] owns the grid and advances
//! it one generation at a time. Each generation is computed in two passes,
//! a read-only evaluate pass followed by a commit pass, so no cell ever sees
//! a neighbour's next state while its own is being decided.

pub mod cell;
pub mod driver;
pub mod error;
pub mod grid;
pub mod patterns;

pub use cell::Cell;
pub use driver::{Driver, Fates, Transition};
pub use error::{Axis, LifeError, Result};
pub use grid::Grid;
pub use patterns::{Pattern, PATTERNS};
