// driver.rs - Generation stepping with synchronous (two-pass) update

use log::{debug, info, trace};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// How many recent fingerprints the cycle detector remembers.
const HISTORY_LEN: usize = 10;

/// One row of Conway's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Alive with fewer than two neighbours.
    Underpopulation,
    /// Alive with two or three neighbours.
    Survival,
    /// Alive with four or more neighbours.
    Overpopulation,
    /// Dead with exactly three neighbours.
    Birth,
    /// Dead with any other count.
    StaysEmpty,
}

impl Transition {
    pub fn classify(alive: bool, living_neighbors: u8) -> Self {
        match (alive, living_neighbors) {
            (true, 0 | 1) => Transition::Underpopulation,
            (true, 2 | 3) => Transition::Survival,
            (true, _) => Transition::Overpopulation,
            (false, 3) => Transition::Birth,
            (false, _) => Transition::StaysEmpty,
        }
    }

    pub fn next_state(self) -> bool {
        matches!(self, Transition::Survival | Transition::Birth)
    }
}

/// The outcome of an evaluate pass: positions (row-major indices) of cells
/// that will be alive and cells that will be dead after the commit.
/// Cells in neither list stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fates {
    to_live: Vec<usize>,
    to_die: Vec<usize>,
}

impl Fates {
    pub fn to_live(&self) -> &[usize] {
        &self.to_live
    }

    pub fn to_die(&self) -> &[usize] {
        &self.to_die
    }

    /// Both lists are built in ascending order, so a merge walk suffices.
    pub fn is_disjoint(&self) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.to_live.len() && j < self.to_die.len() {
            match self.to_live[i].cmp(&self.to_die[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return false,
            }
        }
        true
    }
}

/// Owns the grid and advances it one generation at a time.
#[derive(Debug, Clone)]
pub struct Driver {
    grid: Grid,
    generation: u64,
    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Driver {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            history: [0; HISTORY_LEN],
            history_count: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for seeding or editing between generations.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Treats the current grid as generation 0 again.
    pub fn reset(&mut self) {
        self.generation = 0;
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
    }

    /// Read-only pass: decides every cell's fate against the current grid.
    pub fn evaluate(&self) -> Fates {
        let mut fates = Fates::default();
        for (i, cell) in self.grid.cells_in_order().enumerate() {
            let n = self.grid.living_neighbor_count(cell);
            match Transition::classify(cell.is_alive(), n) {
                Transition::Survival | Transition::Birth => fates.to_live.push(i),
                Transition::Underpopulation | Transition::Overpopulation => fates.to_die.push(i),
                Transition::StaysEmpty => {}
            }
        }
        fates
    }

    /// Write pass: applies a previously evaluated set of fates.
    pub fn commit(&mut self, fates: &Fates) {
        assert!(fates.is_disjoint(), "a cell was scheduled both to live and to die");
        let cells = self.grid.cells_mut();
        for &i in &fates.to_live {
            cells[i].born();
        }
        for &i in &fates.to_die {
            cells[i].die();
        }
    }

    /// Evaluates and commits one generation.
    pub fn advance(&mut self) {
        let fates = self.evaluate();
        trace!(
            "generation {}: {} to live, {} to die",
            self.generation,
            fates.to_live.len(),
            fates.to_die.len()
        );
        self.commit(&fates);
        self.generation += 1;
    }

    /// Hands the current grid to `render`, then advances and renders
    /// `generations` more times, so `render` sees `generations + 1` grids.
    /// Each rendered grid is fed to the cycle detector.
    pub fn run<F>(&mut self, generations: i64, mut render: F) -> Result<()>
    where
        F: FnMut(u64, &Grid),
    {
        let generations =
            u64::try_from(generations).map_err(|_| LifeError::InvalidGenerationCount(generations))?;
        debug!("running {generations} generations from generation {}", self.generation);

        render(self.generation, &self.grid);
        self.note_repeat();
        for _ in 0..generations {
            self.advance();
            render(self.generation, &self.grid);
            self.note_repeat();
        }
        Ok(())
    }

    /// Records the current grid and reports whether it matches one of the
    /// last few recorded grids. Call once per generation.
    pub fn is_repeating(&mut self) -> bool {
        let fingerprint = self.grid.fingerprint();
        let recorded = self.history_count.min(HISTORY_LEN);
        if self.history[..recorded].contains(&fingerprint) {
            return true;
        }
        self.history[self.history_count % HISTORY_LEN] = fingerprint;
        self.history_count += 1;
        false
    }

    fn note_repeat(&mut self) {
        if self.is_repeating() {
            info!("generation {} repeats a recent grid", self.generation);
        }
    }
}
