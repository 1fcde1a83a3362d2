// src/ui/meal_log.rs
use eframe::egui;

use crate::meal::MealRecord;

/// Session log of completed analyses, newest last. Collapsed by default so
/// it stays out of the way until a few meals have accumulated.
pub fn show_meal_log_view(ui: &mut egui::Ui, meal_log: &[MealRecord]) {
    if meal_log.is_empty() {
        return;
    }

    egui::CollapsingHeader::new(format!("Meals this session ({})", meal_log.len()))
        .default_open(false)
        .show(ui, |ui| {
            for record in meal_log {
                ui.horizontal(|ui| {
                    ui.label(record.completed_at.format("%H:%M").to_string());
                    ui.separator();
                    ui.label(format!(
                        "{}g protein, {} items",
                        record.analysis.total_protein(),
                        record.analysis.items.len()
                    ));
                });
            }
        });
}
