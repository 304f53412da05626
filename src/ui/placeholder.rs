// src/ui/placeholder.rs
use eframe::egui;

use crate::ui::panel::Placeholder;

pub fn show_placeholder_view(ui: &mut egui::Ui, placeholder: &Placeholder) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(placeholder.icon).size(40.0));
        ui.heading(placeholder.title);
        ui.label(placeholder.blurb);
    });
    ui.add_space(16.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(400.0);
        ui.label(
            egui::RichText::new(format!("{} {}", placeholder.icon, placeholder.card_title)).strong(),
        );

        ui.add_space(80.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(placeholder.icon).size(48.0).weak());
            ui.add_space(8.0);
            ui.label(egui::RichText::new(placeholder.headline).weak());
            ui.label(egui::RichText::new(placeholder.detail).small().weak());
        });
    });
}
