// src/ui/results.rs
use eframe::egui;

use crate::meal::MealAnalysis;

/// The per-meal breakdown table: one row per food item, footer with the
/// meal total.
pub fn show_results_view(ui: &mut egui::Ui, analysis: &MealAnalysis) {
    ui.vertical_centered(|ui| {
        ui.heading("Protein Analysis");
    });
    ui.add_space(8.0);

    egui::Grid::new("analysis_results")
        .num_columns(3)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Food Name");
            ui.strong("Quantity");
            ui.strong("Protein (g)");
            ui.end_row();

            for item in &analysis.items {
                ui.label(&item.name);
                ui.label(&item.quantity);
                ui.label(format!("{}", item.protein));
                ui.end_row();
            }

            ui.strong("Total for this meal:");
            ui.label("");
            ui.strong(format!("{}g", analysis.total_protein()));
            ui.end_row();
        });
}
