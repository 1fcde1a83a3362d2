// src/ui/upload.rs
use eframe::egui;

use crate::state::TrackerState;

/// The upload control. Returns true when the user asked to pick a photo;
/// the app layer owns the actual file dialog. Disabled while an analysis is
/// in flight so submissions cannot overlap.
pub fn show_upload_view(ui: &mut egui::Ui, state: &TrackerState) -> bool {
    let label = if state.uploaded_image.is_some() {
        "Choose another image"
    } else {
        "Click to upload a photo"
    };

    let mut clicked = false;
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 80.0));
        clicked = ui.add_enabled(!state.is_analyzing(), button).clicked();
    });
    clicked
}

/// Loading indicator shown while the provider has not yet responded.
pub fn show_analyzing_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.strong("Analyzing your meal...");
        ui.add_space(8.0);
        ui.add(egui::Spinner::new().size(48.0));
    });
}

/// Preview of the uploaded photo, shown once analysis has finished.
pub fn show_preview_view(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    ui.vertical_centered(|ui| {
        ui.heading("Your Meal");
        ui.add_space(8.0);
        ui.add(
            egui::Image::new(texture)
                .max_width(ui.available_width().min(420.0))
                .rounding(8.0),
        );
    });
}
