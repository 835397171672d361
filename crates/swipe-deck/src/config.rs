//! Deck configuration.

use serde::{Deserialize, Serialize};

use crate::gesture::{GestureClassifier, GestureThresholds};
use crate::transition::TransitionConfig;

/// Tunable parameters of the swipe deck.
///
/// Every field has a default, so a partial `[gesture]` or `[transition]`
/// table is enough.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub gesture: GestureThresholds,
    pub transition: TransitionConfig,
}

impl DeckConfig {
    /// Build a classifier from the gesture thresholds.
    pub fn classifier(&self) -> GestureClassifier {
        GestureClassifier::new(self.gesture)
    }

    /// Problems that make the configuration unusable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let axes = [
            ("gesture.horizontal", &self.gesture.horizontal),
            ("gesture.vertical", &self.gesture.vertical),
        ];
        for (name, axis) in axes {
            if !axis.distance.is_finite() || axis.distance < 0.0 {
                errors.push(format!("{}.distance must be a non-negative number", name));
            }
            if !axis.velocity.is_finite() || axis.velocity < 0.0 {
                errors.push(format!("{}.velocity must be a non-negative number", name));
            }
        }
        if !self.transition.exit_distance.is_finite() || self.transition.exit_distance <= 0.0 {
            errors.push("transition.exit_distance must be positive".to_string());
        }
        errors
    }
}
