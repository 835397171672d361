//! Swipe-card interaction engine for SushiSwipe.
//!
//! This crate provides:
//! - `GestureClassifier` - Maps drag-end measurements to swipe outcomes
//! - `SwipeSession` - Card stack cursor that applies outcomes to a cart
//! - `CardTransition` - Exit animation hand-off to the presentation layer
//! - `CategorySelector` - Rebuilds the session when the category changes
//!
//! # Example
//!
//! ```rust
//! use swipe_commerce::prelude::*;
//! use swipe_deck::prelude::*;
//!
//! let catalog = StaticCatalog::builtin();
//! let mut cart = CartStore::new(catalog.currency());
//! let mut selector = CategorySelector::new(catalog, TransitionConfig::default());
//! let classifier = GestureClassifier::default();
//!
//! let session = selector.session_mut();
//! session.release(&DragEnd::new(5.0, 140.0, 0.0, 0.0), &classifier, &mut cart);
//! session.command(SwipeDirection::Right, &mut cart);
//!
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(session.position(), 2);
//! ```

pub mod config;
pub mod gesture;
pub mod selector;
pub mod session;
pub mod transition;

pub use config::DeckConfig;
pub use gesture::{
    AxisThresholds, DragEnd, DragFeedback, GestureClassifier, GestureThresholds, SwipeDirection,
    SwipeOutcome, Vec2,
};
pub use selector::CategorySelector;
pub use session::{SessionEvent, SessionState, SwipeReport, SwipeSession};
pub use transition::{CardTransition, ExitTrajectory, TransitionConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DeckConfig;
    pub use crate::gesture::{
        DragEnd, GestureClassifier, GestureThresholds, SwipeDirection, SwipeOutcome, Vec2,
    };
    pub use crate::selector::CategorySelector;
    pub use crate::session::{SessionEvent, SessionState, SwipeReport, SwipeSession};
    pub use crate::transition::TransitionConfig;
}
