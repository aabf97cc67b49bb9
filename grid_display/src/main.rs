// main.rs - Desktop viewer for the conway simulation

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::egui;
use egui::Color32;
use log::{LevelFilter, info, warn};
use simple_logger::SimpleLogger;

use conway::{Driver, Grid, PATTERNS, patterns};

mod grid;
mod ui;

use grid::{DEAD_COLOR, DEFAULT_INTERVAL, GRID_SIZE, LIVE_COLOR};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Warn).env().init()?;
    info!("Starting grid_display v{} ...", env!("CARGO_PKG_VERSION"));

    let app = GameOfLife::new(GRID_SIZE)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer exited with an error: {err}"))
}

/// Viewer state around a single simulation driver.
pub struct GameOfLife {
    driver: Driver,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    next_seed: u64,
}

impl GameOfLife {
    pub fn new(size: usize) -> conway::Result<Self> {
        let grid = Grid::new(size as i64, size as i64)?;
        Ok(Self {
            driver: Driver::new(grid),
            is_running: false,
            last_update: Instant::now(),
            update_interval: DEFAULT_INTERVAL,
            live_color: LIVE_COLOR,
            dead_color: DEAD_COLOR,
            selected_pattern: 0,
            next_seed: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.driver.grid()
    }

    pub fn generation(&self) -> u64 {
        self.driver.generation()
    }

    /// Advances one generation and pauses once the board starts repeating.
    pub fn update_generation(&mut self) {
        self.driver.advance();
        if self.driver.is_repeating() {
            info!("pausing: board repeats at generation {}", self.driver.generation());
            self.is_running = false;
        }
    }

    pub fn clear_grid(&mut self) {
        self.driver.grid_mut().clear();
        self.driver.reset();
    }

    pub fn apply_random_pattern(&mut self) {
        self.driver.grid_mut().populate_seeded(self.next_seed);
        self.next_seed += 1;
        self.driver.reset();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            patterns::apply_centered(self.driver.grid_mut(), pattern);
            self.driver.reset();
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.driver.grid_mut().toggle(row, col) {
            warn!("ignoring click: {err}");
        }
    }
}
