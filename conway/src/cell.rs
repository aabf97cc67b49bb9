use std::fmt;

/// Glyph printed for a live cell.
pub const ALIVE_GLYPH: char = '*';
/// Glyph printed for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// One grid location. Coordinates are fixed at construction; only the
/// life state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn born(&mut self) {
        self.alive = true;
    }

    pub fn die(&mut self) {
        self.alive = false;
    }

    pub fn glyph(&self) -> char {
        if self.alive { ALIVE_GLYPH } else { DEAD_GLYPH }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
