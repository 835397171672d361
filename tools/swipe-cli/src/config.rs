//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use swipe_deck::{DeckConfig, GestureThresholds, TransitionConfig};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sushi-swipe.toml", ".sushi-swipe.toml", "sushi-swipe.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Gesture thresholds per axis.
    #[serde(default)]
    pub gesture: GestureThresholds,

    /// Exit transition timing.
    #[serde(default)]
    pub transition: TransitionConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Deck settings for the swipe engine.
    pub fn deck(&self) -> DeckConfig {
        DeckConfig {
            gesture: self.gesture,
            transition: self.transition,
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (`.toml` or `.json`). The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Category opened first. Defaults to the catalog's first category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default sushi-swipe.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# SushiSwipe configuration

# Drag thresholds in logical units (distance) and units per second (velocity).
[gesture.horizontal]
distance = {distance:.1}
velocity = {velocity:.1}

[gesture.vertical]
distance = {distance:.1}
velocity = {velocity:.1}

[transition]
advance_delay_ms = {delay}
exit_distance = {exit:.1}

[catalog]
# path = "catalog.toml"
# default_category = "seaweed"
"#,
        distance = swipe_deck::AxisThresholds::DEFAULT_DISTANCE,
        velocity = swipe_deck::AxisThresholds::DEFAULT_VELOCITY,
        delay = TransitionConfig::DEFAULT_ADVANCE_DELAY_MS,
        exit = TransitionConfig::DEFAULT_EXIT_DISTANCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sushi-swipe.toml");

        let mut config = CliConfig::default();
        config.gesture.vertical.distance = 50.0;
        config.catalog.default_category = Some("seafood".to_string());
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sushi-swipe.json");
        std::fs::write(&path, r#"{"transition": {"advance_delay_ms": 0}}"#).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.transition.advance_delay_ms, 0);
        assert_eq!(loaded.deck().gesture, GestureThresholds::default());
    }
}
