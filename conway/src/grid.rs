// grid.rs - Fixed-size, non-wrapping Life board

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::{Axis, LifeError, Result};

/// Relative positions of the eight Moore neighbours.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A `width` x `height` board of cells.
///
/// Cells live in a single row-major vector; `(row, col)` addresses the
/// cell at position `row * width + col` of that same vector, so the flat
/// view and the 2D view can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of dead cells. Both dimensions must be positive and
    /// their product must be allocatable; both are checked before any cell
    /// is created.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let width = positive(Axis::Width, width)?;
        let height = positive(Axis::Height, height)?;

        let too_large = || LifeError::GridTooLarge { width, height };
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(row, col));
            }
        }
        trace!("allocated {width}x{height} grid");

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.cells[i].set_alive(alive);
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        let i = self.checked_index(row, col)?;
        let cell = &mut self.cells[i];
        cell.set_alive(!cell.is_alive());
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::die);
    }

    /// Sets every cell to an independent fair coin flip drawn from `rng`.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            cell.set_alive(rng.random_bool(0.5));
        }
        trace!("populated grid, {} alive", self.population());
    }

    /// Same as [`Grid::populate`] with a reproducible seeded source.
    pub fn populate_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.populate(&mut rng);
    }

    /// Number of live cells among the up-to-eight neighbours of `cell`.
    /// Positions beyond the edges do not exist; there is no wraparound.
    pub fn living_neighbor_count(&self, cell: &Cell) -> u8 {
        self.neighbor_count_at(cell.row(), cell.col())
    }

    fn neighbor_count_at(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_alive(nr, nc) {
                count += 1;
            }
        }
        count
    }

    /// Every live cell, row-major.
    pub fn living_cells(&self) -> Vec<&Cell> {
        self.cells.iter().filter(|cell| cell.is_alive()).collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// All cells, row 0 left to right, then row 1, and so on.
    pub fn cells_in_order(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Row-major matrix of display glyphs.
    pub fn snapshot(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().map(Cell::glyph).collect())
            .collect()
    }

    /// Hash of the live pattern, used to spot repeating states.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        for cell in &self.cells {
            cell.is_alive().hash(&mut hasher);
        }
        hasher.finish()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        self.index(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }
}

fn positive(axis: Axis, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(LifeError::InvalidDimension { axis, value }),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
