// src/ui/progress.rs
use eframe::egui;

use crate::state::TrackerState;

/// The daily-progress banner: cumulative total against the goal, plus a
/// remaining-protein or goal-reached message once something has been logged.
pub fn show_progress_view(ui: &mut egui::Ui, state: &TrackerState, goal: f64) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.heading("Daily Progress");
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(state.progress_label(goal))
                    .size(32.0)
                    .strong()
                    .color(egui::Color32::from_rgb(59, 130, 246)),
            );
            ui.add_space(4.0);

            let fraction = if goal > 0.0 {
                (state.daily_total_protein / goal).clamp(0.0, 1.0) as f32
            } else {
                0.0
            };
            ui.add(egui::ProgressBar::new(fraction).desired_width(ui.available_width() * 0.8));

            if let Some(message) = state.progress_message(goal) {
                ui.add_space(4.0);
                ui.label(message);
            }
        });
    });
}
