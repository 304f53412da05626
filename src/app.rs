// src/app.rs
use std::time::Instant;

use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::panel::{self, Panel};

pub struct FeynmanApp {
    state: AppState,
}

impl FeynmanApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Feynman Learning Assistant")
                    .size(36.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(
                    "Master any concept by explaining it simply. Break down complexity into understanding.",
                )
                .size(16.0),
            );
            ui.add_space(12.0);

            // Tab selection using buttons
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    let label = egui::RichText::new(tab.label()).size(16.0);
                    if ui.selectable_label(self.state.active_tab() == tab, label).clicked() {
                        self.state.set_active_tab(tab);
                    }
                }
            });
            ui.add_space(8.0);
        });
    }
}

impl Default for FeynmanApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for FeynmanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.poll(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match panel::derive(&self.state) {
                    Panel::Concept { .. } => {
                        crate::ui::concept::show_concept_view(ui, &mut self.state, now);
                    }
                    Panel::Placeholder(placeholder) => {
                        crate::ui::placeholder::show_placeholder_view(ui, placeholder);
                    }
                }
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message().map(str::to_owned);
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.dismiss_error();
                    }
                });
        }

        // Nothing else wakes egui up when the analysis lands
        if let Some(wait) = self.state.time_until_ready(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
