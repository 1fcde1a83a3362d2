// src/app.rs
use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use rfd::FileDialog;
use tracing::warn;

use crate::analysis::AnalysisStub;
use crate::config::TrackerConfig;
use crate::decode;
use crate::state::TrackerState;
use crate::ui;

pub struct TrackerApp {
    state: TrackerState,
    config: TrackerConfig,
    provider: AnalysisStub,
    /// GPU copy of the current photo; recreated on every submission.
    preview_texture: Option<egui::TextureHandle>,
}

impl TrackerApp {
    pub fn new(config: TrackerConfig) -> Self {
        let provider = AnalysisStub::new(config.analysis_delay());
        Self {
            state: TrackerState::new(),
            config,
            provider,
            preview_texture: None,
        }
    }

    fn pick_meal_photo(&mut self, ctx: &egui::Context) {
        let file_dialog = FileDialog::new()
            .add_filter("Image files", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .set_title("Choose a meal photo");

        if let Some(path) = file_dialog.pick_file() {
            self.submit_photo(ctx, path);
        }
    }

    fn submit_photo(&mut self, ctx: &egui::Context, path: PathBuf) {
        match decode::decode_image_file(&path) {
            Ok(image) => {
                let color_image = image.to_color_image();
                let token = self.state.begin_submission(image);
                self.preview_texture = Some(ctx.load_texture(
                    "meal-preview",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
                self.provider.request(token);
            }
            Err(e) => {
                // Submission aborts before any tracker state changes.
                warn!("rejecting meal photo: {e}");
                self.state.error_message = Some(e.to_string());
            }
        }
    }

    fn show_tracker(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("AI Protein Tracker").size(28.0));
            ui.label("Upload a photo of your meal to estimate your protein intake.");
        });
        ui.add_space(16.0);

        if ui::upload::show_upload_view(ui, &self.state) {
            self.pick_meal_photo(ctx);
        }
        ui.add_space(16.0);

        if self.state.is_analyzing() {
            ui::upload::show_analyzing_view(ui);
            ui.add_space(16.0);
        } else if self.state.uploaded_image.is_some() {
            if let Some(texture) = &self.preview_texture {
                ui::upload::show_preview_view(ui, texture);
                ui.add_space(16.0);
            }
        }

        if let Some(analysis) = &self.state.current_analysis {
            ui::results::show_results_view(ui, analysis);
            ui.add_space(16.0);
        }

        ui::progress::show_progress_view(ui, &self.state, self.config.protein_goal);

        if self.state.show_suggestions(self.config.protein_goal) {
            ui.add_space(16.0);
            ui::suggestions::show_suggestions_view(ui, &self.config.suggestions);
        }

        ui.add_space(16.0);
        ui::meal_log::show_meal_log_view(ui, &self.state.meal_log);
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver any finished analyses before drawing this frame.
        while let Some(outcome) = self.provider.poll() {
            match outcome.result {
                Ok(analysis) => {
                    self.state.complete_analysis(outcome.token, analysis);
                }
                Err(e) => {
                    self.state.fail_analysis(outcome.token, &e);
                }
            }
        }

        if self.state.is_analyzing() {
            // Keep frames coming until the pending completion lands.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_tracker(ctx, ui);
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
