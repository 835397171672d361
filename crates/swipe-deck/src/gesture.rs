//! Drag-end gesture classification.
//!
//! A completed drag is reduced to one of four outcomes. Vertical intent is
//! checked first so that a fast diagonal drag toward the cart commits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 2D vector in logical (screen-independent) units. Positive `y` is down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The neutral resting position.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Final measurements of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragEnd {
    /// Offset from the resting position when the pointer was released.
    pub offset: Vec2,
    /// Release velocity in logical units per second.
    pub velocity: Vec2,
}

impl DragEnd {
    pub fn new(offset_x: f64, offset_y: f64, velocity_x: f64, velocity_y: f64) -> Self {
        Self {
            offset: Vec2::new(offset_x, offset_y),
            velocity: Vec2::new(velocity_x, velocity_y),
        }
    }
}

/// Distance and velocity thresholds for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisThresholds {
    /// Offset that must be exceeded, in logical units.
    pub distance: f64,
    /// Velocity that must be exceeded, in logical units per second.
    pub velocity: f64,
}

impl AxisThresholds {
    pub const DEFAULT_DISTANCE: f64 = 80.0;
    pub const DEFAULT_VELOCITY: f64 = 400.0;

    pub fn new(distance: f64, velocity: f64) -> Self {
        Self { distance, velocity }
    }

    fn crosses_positive(&self, offset: f64, velocity: f64) -> bool {
        offset > self.distance || velocity > self.velocity
    }

    fn crosses_negative(&self, offset: f64, velocity: f64) -> bool {
        offset < -self.distance || velocity < -self.velocity
    }
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DISTANCE, Self::DEFAULT_VELOCITY)
    }
}

/// Per-axis thresholds used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    pub horizontal: AxisThresholds,
    pub vertical: AxisThresholds,
}

/// Result of classifying a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// Add the current item to the cart and advance.
    CommitDown,
    /// Skip the current item, card leaves to the right.
    DiscardRight,
    /// Skip the current item, card leaves to the left.
    DiscardLeft,
    /// No threshold crossed; card returns to rest.
    SnapBack,
}

impl SwipeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeOutcome::CommitDown => "commit_down",
            SwipeOutcome::DiscardRight => "discard_right",
            SwipeOutcome::DiscardLeft => "discard_left",
            SwipeOutcome::SnapBack => "snap_back",
        }
    }

    /// The directional command equivalent to this outcome.
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            SwipeOutcome::CommitDown => Some(SwipeDirection::Down),
            SwipeOutcome::DiscardRight => Some(SwipeDirection::Right),
            SwipeOutcome::DiscardLeft => Some(SwipeDirection::Left),
            SwipeOutcome::SnapBack => None,
        }
    }
}

impl fmt::Display for SwipeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete swipe command, as issued by buttons or keys.
///
/// `Left` is a forward skip like `Right`; it never revisits an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
    Down,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Down => "down",
        }
    }

    /// Hint shown next to the control.
    pub fn display_name(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "Skip",
            SwipeDirection::Right => "Next",
            SwipeDirection::Down => "Add to cart",
        }
    }

    /// The classifier outcome this command is equivalent to.
    pub fn outcome(&self) -> SwipeOutcome {
        match self {
            SwipeDirection::Left => SwipeOutcome::DiscardLeft,
            SwipeDirection::Right => SwipeOutcome::DiscardRight,
            SwipeDirection::Down => SwipeOutcome::CommitDown,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown swipe direction '{}' (expected left, right or down)", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for SwipeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(SwipeDirection::Left),
            "right" | "r" => Ok(SwipeDirection::Right),
            "down" | "d" => Ok(SwipeDirection::Down),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Classifies drag-end measurements into swipe outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Decide the outcome of a drag. First match wins:
    /// down, then right, then left, otherwise snap back.
    ///
    /// NaN never compares greater or less than a threshold, so malformed
    /// measurements snap back.
    pub fn classify(&self, drag: &DragEnd) -> SwipeOutcome {
        let h = &self.thresholds.horizontal;
        let v = &self.thresholds.vertical;

        if v.crosses_positive(drag.offset.y, drag.velocity.y) {
            SwipeOutcome::CommitDown
        } else if h.crosses_positive(drag.offset.x, drag.velocity.x) {
            SwipeOutcome::DiscardRight
        } else if h.crosses_negative(drag.offset.x, drag.velocity.x) {
            SwipeOutcome::DiscardLeft
        } else {
            SwipeOutcome::SnapBack
        }
    }
}

/// Visual feedback for a card being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragFeedback {
    /// Card tilt in degrees, positive clockwise.
    pub rotation_deg: f64,
    /// Card opacity in `0.5..=1.0`.
    pub opacity: f64,
}

impl DragFeedback {
    const TILT_RANGE: f64 = 200.0;
    const MAX_TILT_DEG: f64 = 25.0;
    const FADE_START: f64 = 100.0;
    const MIN_OPACITY: f64 = 0.5;

    /// Feedback for a horizontal drag offset.
    pub fn for_offset(offset: Vec2) -> Self {
        let x = if offset.x.is_nan() { 0.0 } else { offset.x };
        let clamped = x.clamp(-Self::TILT_RANGE, Self::TILT_RANGE);

        let rotation_deg = clamped / Self::TILT_RANGE * Self::MAX_TILT_DEG;

        let distance = clamped.abs();
        let opacity = if distance <= Self::FADE_START {
            1.0
        } else {
            let t = (distance - Self::FADE_START) / (Self::TILT_RANGE - Self::FADE_START);
            1.0 - t * (1.0 - Self::MIN_OPACITY)
        };

        Self {
            rotation_deg,
            opacity,
        }
    }
}

impl Default for DragFeedback {
    fn default() -> Self {
        Self::for_offset(Vec2::ZERO)
    }
}
