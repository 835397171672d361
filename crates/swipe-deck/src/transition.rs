//! Exit transitions for cards leaving the stack.
//!
//! A swipe commits its logical effects immediately. The card that left is
//! described by a [`CardTransition`] the presentation layer animates and
//! then completes, at which point the next card becomes interactive.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use swipe_commerce::ItemId;

use crate::gesture::{SwipeDirection, Vec2};

/// Timing and geometry of exit transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Delay before the next card is shown, in milliseconds.
    pub advance_delay_ms: u64,
    /// How far a leaving card travels, in logical units.
    pub exit_distance: f64,
}

impl TransitionConfig {
    pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 200;
    pub const DEFAULT_EXIT_DISTANCE: f64 = 1000.0;

    /// No delay; the next card is shown as soon as the swipe returns.
    pub fn immediate() -> Self {
        Self {
            advance_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: Self::DEFAULT_ADVANCE_DELAY_MS,
            exit_distance: Self::DEFAULT_EXIT_DISTANCE,
        }
    }
}

/// Where a leaving card is animated to, relative to its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitTrajectory {
    /// Direction the card leaves in.
    pub direction: SwipeDirection,
    /// Target offset.
    pub target: Vec2,
}

impl ExitTrajectory {
    pub fn new(direction: SwipeDirection, distance: f64) -> Self {
        let target = match direction {
            SwipeDirection::Down => Vec2::new(0.0, distance),
            SwipeDirection::Right => Vec2::new(distance, 0.0),
            SwipeDirection::Left => Vec2::new(-distance, 0.0),
        };
        Self { direction, target }
    }

    /// Length of the exit path.
    pub fn magnitude(&self) -> f64 {
        self.target.x.hypot(self.target.y)
    }
}

/// A card on its way out of the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTransition {
    /// Position of the outgoing card in the session's item list.
    pub outgoing_position: usize,
    /// The outgoing item.
    pub outgoing_item: ItemId,
    /// Exit path for the animation.
    pub exit: ExitTrajectory,
    /// Delay before the next card should become interactive, in milliseconds.
    pub delay_ms: u64,
}

impl CardTransition {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_trajectories() {
        let down = ExitTrajectory::new(SwipeDirection::Down, 1000.0);
        assert_eq!(down.target, Vec2::new(0.0, 1000.0));

        let right = ExitTrajectory::new(SwipeDirection::Right, 1000.0);
        assert_eq!(right.target, Vec2::new(1000.0, 0.0));

        let left = ExitTrajectory::new(SwipeDirection::Left, 500.0);
        assert_eq!(left.target, Vec2::new(-500.0, 0.0));
        assert_eq!(left.magnitude(), 500.0);
    }

    #[test]
    fn test_default_config() {
        let config = TransitionConfig::default();
        assert_eq!(config.advance_delay(), Duration::from_millis(200));
        assert_eq!(config.exit_distance, 1000.0);
        assert_eq!(TransitionConfig::immediate().advance_delay(), Duration::ZERO);
    }
}
