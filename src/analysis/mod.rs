// src/analysis/mod.rs
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

use crate::meal::{FoodItem, MealAnalysis};

/// Correlation token carried by each submission so a late or duplicate
/// completion can be told apart from the one currently pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisToken(Uuid);

impl AnalysisToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    #[error("analysis provider failed: {0}")]
    Provider(String),
}

/// What the provider delivers back to the UI thread, once per submission.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub token: AnalysisToken,
    pub result: Result<MealAnalysis, AnalysisError>,
}

/// The fixed result the stub returns for every photo, standing in for a real
/// inference service.
pub fn stub_meal() -> MealAnalysis {
    MealAnalysis::new(vec![
        FoodItem::new("🍗 Chicken Breast", "150g", 45.0),
        FoodItem::new("🍚 Cooked Rice", "200g", 4.0),
        FoodItem::new("🥗 Salad", "100g", 1.0),
    ])
}

/// Stub analysis provider. `request` schedules one completion after a fixed
/// delay on a background thread; `poll` drains completions on the UI thread.
pub struct AnalysisStub {
    delay: Duration,
    tx: Sender<AnalysisOutcome>,
    rx: Receiver<AnalysisOutcome>,
}

impl AnalysisStub {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { delay, tx, rx }
    }

    /// Kick off one simulated analysis. Returns immediately; the outcome
    /// arrives later via `poll`.
    pub fn request(&self, token: AnalysisToken) {
        let tx = self.tx.clone();
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(AnalysisOutcome {
                token,
                result: Ok(stub_meal()),
            });
        });
    }

    /// Non-blocking check for a finished analysis.
    pub fn poll(&self) -> Option<AnalysisOutcome> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_meal_is_the_fixed_three_items() {
        let meal = stub_meal();
        assert_eq!(meal.items.len(), 3);
        assert_eq!(meal.total_protein(), 50.0);
        assert_eq!(meal.items[0].protein, 45.0);
    }

    #[test]
    fn request_delivers_outcome_with_matching_token() {
        let stub = AnalysisStub::new(Duration::from_millis(10));
        let token = AnalysisToken::new();
        stub.request(token);

        let outcome = stub
            .rx
            .recv_timeout(Duration::from_secs(5))
            .expect("stub never delivered");
        assert_eq!(outcome.token, token);
        assert_eq!(outcome.result.unwrap(), stub_meal());
    }

    #[test]
    fn poll_is_empty_before_the_delay_elapses() {
        let stub = AnalysisStub::new(Duration::from_secs(60));
        stub.request(AnalysisToken::new());
        assert!(stub.poll().is_none());
    }

    #[test]
    fn distinct_tokens_never_compare_equal() {
        assert_ne!(AnalysisToken::new(), AnalysisToken::new());
    }
}
