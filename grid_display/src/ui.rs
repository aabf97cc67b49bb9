// ui.rs - eframe front end over the conway driver

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::GameOfLife;
use crate::grid::{BOX_SIZE, SPACING};
use conway::PATTERNS;

const PITCH: f32 = BOX_SIZE + SPACING;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.transport_row(ui);
            self.appearance_row(ui);
        });
        egui::TopBottomPanel::bottom("stats").show(ctx, |ui| self.stats_row(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| self.board(ui));
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    /// Run/step/reset buttons and the pattern picker.
    fn transport_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.is_running { "⏸ Pause" } else { "▶ Run" };
            if ui.button(label).clicked() {
                self.is_running = !self.is_running;
                self.last_update = Instant::now();
            }
            let paused = !self.is_running;
            if ui.add_enabled(paused, egui::Button::new("⏭ Step")).clicked() {
                self.update_generation();
            }

            let mut stop = false;
            if ui.button("⏹ Clear").clicked() {
                self.clear_grid();
                stop = true;
            }
            if ui.button("🎲 Random").clicked() {
                self.apply_random_pattern();
                stop = true;
            }

            ui.separator();
            egui::ComboBox::from_id_source("pattern_selector")
                .show_index(ui, &mut self.selected_pattern, PATTERNS.len(), |i| PATTERNS[i].name);
            if ui.button("Load").clicked() {
                self.apply_selected_pattern();
                stop = true;
            }
            if stop {
                self.is_running = false;
            }
        });
    }

    /// Tick rate and cell colours.
    fn appearance_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut rate = 1.0 / self.update_interval.as_secs_f32().max(0.001);
            let slider = egui::Slider::new(&mut rate, 0.5..=90.0)
                .logarithmic(true)
                .text("gen/sec");
            if ui.add(slider).changed() {
                self.update_interval = Duration::from_secs_f32(1.0 / rate);
            }
            ui.separator();
            for (name, color) in [("alive", &mut self.live_color), ("dead", &mut self.dead_color)] {
                ui.label(name);
                ui.color_edit_button_srgba(color);
            }
        });
    }

    fn stats_row(&self, ui: &mut egui::Ui) {
        let grid = self.grid();
        let alive = grid.population();
        let share = alive as f32 * 100.0 / grid.len() as f32;
        ui.label(format!(
            "Generation {} | {alive} of {} cells alive ({share:.1}%)",
            self.generation(),
            grid.len(),
        ));
    }

    /// Paints the board; a click while paused toggles the cell under it.
    fn board(&mut self, ui: &mut egui::Ui) {
        let (width, height) = (self.grid().width(), self.grid().height());
        let size = Vec2::new(width as f32, height as f32) * PITCH - Vec2::splat(SPACING);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        let outline = Stroke::new(0.2, Color32::from_gray(60));
        for cell in self.grid().cells_in_order() {
            let corner = origin + Vec2::new(cell.col() as f32, cell.row() as f32) * PITCH;
            let rect = Rect::from_min_size(corner, Vec2::splat(BOX_SIZE));
            let fill = if cell.is_alive() { self.live_color } else { self.dead_color };
            painter.rect(rect, 1.0, fill, outline);
        }

        if self.is_running || !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let offset = (pos - origin) / PITCH;
        if offset.x >= 0.0 && offset.y >= 0.0 {
            let (row, col) = (offset.y as usize, offset.x as usize);
            if row < height && col < width {
                self.toggle_cell(row, col);
            }
        }
    }
}
