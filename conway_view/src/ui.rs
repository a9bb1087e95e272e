// ui.rs - eframe glue: input, pacing, status bar and grid drawing

use std::time::Instant;

use conway::PATTERNS;
use eframe::egui;
use egui::Vec2;

use crate::render;
use crate::{GameOfLife, STATUS_BAR_HEIGHT};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any key press asks for a new random seed
        let key_presses = ctx.input(|i| {
            i.events
                .iter()
                .filter(|event| matches!(event, egui::Event::Key { pressed: true, .. }))
                .count()
        });
        if key_presses > 0 {
            self.request_reseed();
        }

        let now = Instant::now();
        if self.is_due(now) {
            self.step(now);
        }

        egui::TopBottomPanel::top("status")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(format!("Generation: {}", self.generation));
                    ui.separator();
                    ui.label(format!("Population: {}", self.grid().population()));
                    ui.separator();

                    egui::ComboBox::from_id_source("pattern_selector")
                        .selected_text(PATTERNS[self.selected_pattern].name)
                        .show_ui(ui, |ui| {
                            for (i, pattern) in PATTERNS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                            }
                        });
                    if ui.button("Apply").clicked() {
                        self.apply_selected_pattern();
                    }

                    if self.settled {
                        ui.separator();
                        ui.label("Settled");
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.palette.dead))
            .show(ctx, |ui| {
                let cell_size = self.config.cell_size as f32;
                let size = Vec2::new(
                    self.config.window_width as f32,
                    self.config.window_height as f32,
                );
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;

                render::draw_grid(&painter, origin, cell_size, self.grid(), &self.palette);

                if response.clicked() {
                    let clicked = response
                        .interact_pointer_pos()
                        .and_then(|pos| render::cell_at(origin, cell_size, self.grid(), pos));
                    if let Some((x, y)) = clicked {
                        self.toggle_cell(x, y);
                    }
                }
            });

        ctx.request_repaint_after(self.update_interval);
    }
}
