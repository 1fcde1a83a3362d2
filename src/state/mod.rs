// src/state/mod.rs
use tracing::{info, warn};

use crate::analysis::{AnalysisError, AnalysisToken};
use crate::decode::DecodedImage;
use crate::meal::{MealAnalysis, MealRecord};

/// The meal-tracking view-model: owns all mutable state for one session and
/// exposes derived values to the presentation layer. Mutated only by the
/// submission and completion transitions below.
#[derive(Debug, Default)]
pub struct TrackerState {
    /// The photo currently shown in the preview, if any.
    pub uploaded_image: Option<DecodedImage>,
    /// The breakdown of the most recently completed analysis.
    pub current_analysis: Option<MealAnalysis>,
    /// Cumulative protein grams across all completed analyses this session.
    /// Only ever increases, and only via `complete_analysis`.
    pub daily_total_protein: f64,
    /// Every completed analysis this session, oldest first.
    pub meal_log: Vec<MealRecord>,
    /// Shown in the error modal; cleared when the user dismisses it.
    pub error_message: Option<String>,

    /// Token of the in-flight analysis. `Some` exactly while analyzing.
    pending: Option<AnalysisToken>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new submission cycle for an already-decoded photo. A decode
    /// failure happens before this is ever called, so a bad file leaves the
    /// tracker untouched. Returns the correlation token the provider must
    /// echo back.
    pub fn begin_submission(&mut self, image: DecodedImage) -> AnalysisToken {
        let token = AnalysisToken::new();
        self.uploaded_image = Some(image);
        self.current_analysis = None;
        self.pending = Some(token);
        info!(?token, "meal photo submitted, analysis pending");
        token
    }

    /// Apply a completed analysis. Only the pending token is accepted; a
    /// stale or duplicate completion is rejected without touching any state.
    /// This is the sole mutation path for `daily_total_protein`.
    pub fn complete_analysis(&mut self, token: AnalysisToken, analysis: MealAnalysis) -> bool {
        if self.pending != Some(token) {
            warn!(?token, "dropping completion for a submission no longer pending");
            return false;
        }
        self.pending = None;
        self.daily_total_protein += analysis.total_protein();
        info!(
            meal_protein = analysis.total_protein(),
            daily_total = self.daily_total_protein,
            "analysis complete"
        );
        self.meal_log.push(MealRecord::now(analysis.clone()));
        self.current_analysis = Some(analysis);
        true
    }

    /// Provider failure: back to idle with a user-visible message, daily
    /// total untouched. The stub never produces this, but the policy is
    /// fixed here so a real provider can slot in.
    pub fn fail_analysis(&mut self, token: AnalysisToken, error: &AnalysisError) -> bool {
        if self.pending != Some(token) {
            warn!(?token, "dropping failure for a submission no longer pending");
            return false;
        }
        self.pending = None;
        self.error_message = Some(error.to_string());
        true
    }

    /// Protein grams still needed to reach `goal`. Never negative.
    pub fn remaining_protein(&self, goal: f64) -> f64 {
        (goal - self.daily_total_protein).max(0.0)
    }

    /// Protein total of the currently displayed analysis, 0 when none.
    pub fn meal_protein_total(&self) -> f64 {
        self.current_analysis
            .as_ref()
            .map(MealAnalysis::total_protein)
            .unwrap_or(0.0)
    }

    pub fn goal_reached(&self, goal: f64) -> bool {
        self.remaining_protein(goal) == 0.0
    }

    /// Suggestions appear once something has been logged but the goal is
    /// still short.
    pub fn show_suggestions(&self, goal: f64) -> bool {
        self.remaining_protein(goal) > 0.0 && self.daily_total_protein > 0.0
    }

    /// Banner headline, e.g. "50g / 100g".
    pub fn progress_label(&self, goal: f64) -> String {
        format!("{}g / {}g", self.daily_total_protein, goal)
    }

    /// Banner message below the headline; nothing until the first meal.
    pub fn progress_message(&self, goal: f64) -> Option<String> {
        if self.daily_total_protein <= 0.0 {
            return None;
        }
        let remaining = self.remaining_protein(goal);
        if remaining > 0.0 {
            Some(format!(
                "You need {}g more protein to reach your daily target.",
                remaining
            ))
        } else {
            Some("Congratulations! You've reached your protein goal!".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stub_meal;
    use crate::meal::FoodItem;

    fn test_image() -> DecodedImage {
        DecodedImage::solid(2, 2)
    }

    fn meal(protein: f64) -> MealAnalysis {
        MealAnalysis::new(vec![FoodItem::new("Tofu", "100g", protein)])
    }

    #[test]
    fn analyzing_is_bracketed_by_submission_and_completion() {
        let mut state = TrackerState::new();
        assert!(!state.is_analyzing());

        let token = state.begin_submission(test_image());
        assert!(state.is_analyzing());
        assert!(state.current_analysis.is_none());
        assert!(state.uploaded_image.is_some());

        assert!(state.complete_analysis(token, meal(30.0)));
        assert!(!state.is_analyzing());
        assert!(state.current_analysis.is_some());
    }

    #[test]
    fn daily_total_increases_by_exactly_the_completed_sum() {
        let mut state = TrackerState::new();
        let token = state.begin_submission(test_image());
        let before = state.daily_total_protein;
        state.complete_analysis(token, stub_meal());
        assert_eq!(state.daily_total_protein, before + 50.0);
    }

    #[test]
    fn canonical_scenario_goal_100() {
        let mut state = TrackerState::new();
        let token = state.begin_submission(test_image());
        state.complete_analysis(token, stub_meal());

        assert_eq!(state.daily_total_protein, 50.0);
        assert_eq!(state.remaining_protein(100.0), 50.0);
        assert_eq!(state.meal_protein_total(), 50.0);
        assert_eq!(state.current_analysis.as_ref().unwrap().items.len(), 3);
        assert_eq!(state.progress_label(100.0), "50g / 100g");
        assert_eq!(
            state.progress_message(100.0).unwrap(),
            "You need 50g more protein to reach your daily target."
        );
        assert!(state.show_suggestions(100.0));
    }

    #[test]
    fn two_sequential_meals_reach_the_goal() {
        let mut state = TrackerState::new();
        for _ in 0..2 {
            let token = state.begin_submission(test_image());
            state.complete_analysis(token, meal(50.0));
        }
        assert_eq!(state.daily_total_protein, 100.0);
        assert_eq!(state.remaining_protein(100.0), 0.0);
        assert!(state.goal_reached(100.0));
        assert!(!state.show_suggestions(100.0));
        assert_eq!(
            state.progress_message(100.0).unwrap(),
            "Congratulations! You've reached your protein goal!"
        );
        assert_eq!(state.meal_log.len(), 2);
    }

    #[test]
    fn remaining_protein_is_never_negative() {
        let mut state = TrackerState::new();
        let token = state.begin_submission(test_image());
        state.complete_analysis(token, meal(120.0));
        assert_eq!(state.remaining_protein(100.0), 0.0);
    }

    #[test]
    fn meal_total_is_zero_without_an_analysis() {
        let state = TrackerState::new();
        assert_eq!(state.meal_protein_total(), 0.0);

        let mut state = TrackerState::new();
        state.begin_submission(test_image());
        // Cleared while analyzing.
        assert_eq!(state.meal_protein_total(), 0.0);
    }

    #[test]
    fn stale_completion_is_rejected() {
        let mut state = TrackerState::new();
        let stale = state.begin_submission(test_image());
        let current = state.begin_submission(test_image());

        assert!(!state.complete_analysis(stale, meal(40.0)));
        assert_eq!(state.daily_total_protein, 0.0);
        assert!(state.is_analyzing());

        assert!(state.complete_analysis(current, meal(40.0)));
        assert_eq!(state.daily_total_protein, 40.0);
    }

    #[test]
    fn failure_returns_to_idle_without_touching_the_total() {
        let mut state = TrackerState::new();
        let token = state.begin_submission(test_image());
        let error = AnalysisError::Provider("model unavailable".into());

        assert!(state.fail_analysis(token, &error));
        assert!(!state.is_analyzing());
        assert_eq!(state.daily_total_protein, 0.0);
        assert!(state.error_message.as_ref().unwrap().contains("model unavailable"));
    }

    #[test]
    fn no_message_and_no_suggestions_before_the_first_meal() {
        let state = TrackerState::new();
        assert_eq!(state.progress_message(100.0), None);
        assert!(!state.show_suggestions(100.0));
        assert_eq!(state.progress_label(100.0), "0g / 100g");
    }
}
