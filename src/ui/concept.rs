// src/ui/concept.rs
use std::time::Instant;

use eframe::egui;
use tracing::debug;

use crate::analysis::AnalysisResult;
use crate::state::AppState;
use crate::ui::panel;

pub fn show_concept_view(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("🧠").size(40.0));
        ui.heading("Feynman Concept Analyzer");
        ui.label(
            "Enter any complex concept and I'll help you break it down into simple, \
             understandable terms using the Feynman Technique.",
        );
    });
    ui.add_space(16.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("📖 What concept would you like to understand?").strong());
        ui.add_space(8.0);

        let mut draft = state.input_text().to_owned();
        let response = ui.add_sized(
            [ui.available_width(), 100.0],
            egui::TextEdit::multiline(&mut draft)
                .hint_text("e.g., Quantum mechanics, Machine learning, Photosynthesis..."),
        );
        if response.changed() {
            state.set_input_text(draft);
        }

        ui.add_space(8.0);

        let trigger = panel::trigger(state);
        let button = egui::Button::new(egui::RichText::new(trigger.caption()).size(18.0));
        if ui
            .add_enabled(trigger.enabled, button.min_size(egui::vec2(ui.available_width(), 36.0)))
            .clicked()
        {
            if let Err(reason) = state.request_analysis(now) {
                debug!(reason = reason.code(), "analysis request ignored");
            }
        }
    });

    if let Some(result) = state.result() {
        ui.add_space(16.0);
        draw_result(ui, result);

        if let Some(at) = state.last_analyzed() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("Last analyzed: {}", at.format("%H:%M:%S")))
                    .small()
                    .weak(),
            );
        }
    }
}

fn draw_result(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("💡 Simplified Explanation").strong().size(16.0));
        ui.add_space(8.0);
        ui.label(result.simplified_explanation.as_str());
    });

    ui.add_space(12.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("📖 Complex Words Explained").strong().size(16.0));
        ui.add_space(8.0);

        for item in &result.complex_words {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(item.word.as_str()).strong().monospace());
                ui.label(egui::RichText::new(item.definition.as_str()).weak());
            });
            ui.add_space(4.0);
        }
    });

    ui.add_space(12.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("🧠 Key Learning Points").strong().size(16.0));
        ui.add_space(8.0);

        for point in &result.key_points {
            ui.horizontal(|ui| {
                ui.label("•");
                ui.label(point.as_str());
            });
        }
    });
}
