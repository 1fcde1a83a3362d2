// src/config/mod.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User-tunable settings, read once at startup from a RON file under the
/// platform config directory. Missing file means defaults; a file that
/// exists but does not parse is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Daily protein target in grams.
    #[serde(default = "default_protein_goal")]
    pub protein_goal: f64,
    /// How long the stub provider waits before delivering its result.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
    /// High-protein foods suggested while the goal is still short.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_protein_goal() -> f64 {
    100.0
}

fn default_analysis_delay_ms() -> u64 {
    2000
}

fn default_suggestions() -> Vec<String> {
    ["Paneer", "Tofu", "Lentils", "Chicken Breast"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            protein_goal: default_protein_goal(),
            analysis_delay_ms: default_analysis_delay_ms(),
            suggestions: default_suggestions(),
        }
    }
}

impl TrackerConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("protein-tracker").join("tracker.ron"))
    }

    /// Load the config file if present, otherwise fall back to defaults.
    pub fn load_or_default() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let config = TrackerConfig::default();
        assert_eq!(config.protein_goal, 100.0);
        assert_eq!(config.analysis_delay(), Duration::from_millis(2000));
        assert_eq!(config.suggestions.len(), 4);
        assert_eq!(config.suggestions[0], "Paneer");
    }

    #[test]
    fn parses_a_partial_ron_file() {
        let config: TrackerConfig = ron::from_str("(protein_goal: 140.0)").unwrap();
        assert_eq!(config.protein_goal, 140.0);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.analysis_delay_ms, 2000);
        assert_eq!(config.suggestions.len(), 4);
    }

    #[test]
    fn parses_a_full_ron_file() {
        let config: TrackerConfig = ron::from_str(
            r#"(
                protein_goal: 80.0,
                analysis_delay_ms: 500,
                suggestions: ["Eggs", "Greek Yogurt"],
            )"#,
        )
        .unwrap();
        assert_eq!(config.protein_goal, 80.0);
        assert_eq!(config.analysis_delay(), Duration::from_millis(500));
        assert_eq!(config.suggestions, vec!["Eggs", "Greek Yogurt"]);
    }
}
