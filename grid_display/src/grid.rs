// grid.rs - Viewer board configuration

use std::time::Duration;

use egui::Color32;

// Compile-time board configuration
pub const GRID_SIZE: usize = 50;                       // Cells per side
pub const BOX_SIZE: f32 = 15.0;                        // On-screen cell size in points
pub const SPACING: f32 = 0.5;                          // Gap between cells
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

pub const LIVE_COLOR: Color32 = Color32::from_rgb(0, 200, 0);
pub const DEAD_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
