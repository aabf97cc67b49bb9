use log::debug;

use crate::grid::Grid;

/// A named seed pattern, as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

/// Clears `grid` and stamps `pattern` with its top-left corner at
/// `(origin_row, origin_col)`. Cells that would land outside the grid are
/// dropped. Returns how many cells were placed.
pub fn apply_pattern(
    grid: &mut Grid,
    pattern: &Pattern,
    origin_row: usize,
    origin_col: usize,
) -> usize {
    grid.clear();

    let mut placed = 0;
    for &(row, col) in pattern.cells {
        let (Some(r), Some(c)) = (origin_row.checked_add(row), origin_col.checked_add(col)) else {
            continue;
        };
        if grid.set(r, c, true).is_ok() {
            placed += 1;
        }
    }
    if placed < pattern.cells.len() {
        debug!(
            "{} clipped: {placed} of {} cells fit",
            pattern.name,
            pattern.cells.len()
        );
    }
    placed
}

/// Stamps `pattern` in the middle of `grid`.
pub fn apply_centered(grid: &mut Grid, pattern: &Pattern) -> usize {
    let (rows, cols) = pattern.extent();
    let origin_row = grid.height().saturating_sub(rows) / 2;
    let origin_col = grid.width().saturating_sub(cols) / 2;
    apply_pattern(grid, pattern, origin_row, origin_col)
}
