// src/ui/mod.rs
pub mod meal_log;
pub mod progress;
pub mod results;
pub mod suggestions;
pub mod upload;
