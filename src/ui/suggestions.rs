// src/ui/suggestions.rs
use eframe::egui;

/// Static list of high-protein foods, shown while the goal is still short.
pub fn show_suggestions_view(ui: &mut egui::Ui, suggestions: &[String]) {
    ui.vertical_centered(|ui| {
        ui.heading("High-Protein Suggestions");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for food in suggestions {
                ui.label(
                    egui::RichText::new(format!(" {} ", food))
                        .background_color(egui::Color32::from_rgb(220, 252, 231))
                        .color(egui::Color32::from_rgb(22, 101, 52)),
                );
            }
        });
    });
}
