// src/meal/mod.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recognized food in a meal photo. Immutable once produced by the
/// analysis provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Display label, may include a leading glyph (e.g. "🍗 Chicken Breast").
    pub name: String,
    /// Human-readable amount, e.g. "150g".
    pub quantity: String,
    /// Protein content in grams, non-negative.
    pub protein: f64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, protein: f64) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            protein,
        }
    }
}

/// The result of analyzing a single meal photo. Item order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealAnalysis {
    pub items: Vec<FoodItem>,
}

impl MealAnalysis {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn total_protein(&self) -> f64 {
        self.items.iter().map(|item| item.protein).sum()
    }
}

/// A completed analysis kept in the session log.
#[derive(Debug, Clone)]
pub struct MealRecord {
    pub completed_at: DateTime<Local>,
    pub analysis: MealAnalysis,
}

impl MealRecord {
    pub fn now(analysis: MealAnalysis) -> Self {
        Self {
            completed_at: Local::now(),
            analysis,
        }
    }
}
