//! Swipe session over one category's card stack.
//!
//! A session walks an item snapshot from position 0 to the end. Every
//! accepted swipe moves the cursor forward by exactly one; nothing moves it
//! back. Cart effects and the new position are committed inside the swipe
//! call, while the visual hand-over to the next card is tracked separately
//! as a [`CardTransition`].

use serde::{Deserialize, Serialize};
use swipe_commerce::cart::CartSink;
use swipe_commerce::catalog::Item;
use swipe_commerce::ItemId;
use tracing::{debug, info};

use crate::gesture::{DragEnd, DragFeedback, GestureClassifier, SwipeDirection, SwipeOutcome, Vec2};
use crate::transition::{CardTransition, ExitTrajectory, TransitionConfig};

/// Logical state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Showing the item at `position`.
    Active { position: usize },
    /// Every item has been reviewed. Terminal.
    Exhausted,
}

impl SessionState {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SessionState::Exhausted)
    }
}

/// Something that happened in a session, queued for observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The item was added to the cart.
    ItemCommitted { position: usize, item_id: ItemId },
    /// The item was skipped.
    ItemDiscarded {
        position: usize,
        item_id: ItemId,
        direction: SwipeDirection,
    },
    /// The session reached the end of its items. Emitted once.
    Completed { reviewed: usize },
}

/// Result of an accepted swipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeReport {
    /// The outcome that was applied.
    pub outcome: SwipeOutcome,
    /// Position of the card the swipe acted on.
    pub position: usize,
    /// Item added to the cart, for `CommitDown`.
    pub committed: Option<ItemId>,
    /// Whether this swipe exhausted the session.
    pub completed: bool,
}

/// One run through an ordered item list.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    items: Vec<Item>,
    position: usize,
    drag_offset: Vec2,
    transition: Option<CardTransition>,
    config: TransitionConfig,
    completion_fired: bool,
    events: Vec<SessionEvent>,
}

impl SwipeSession {
    /// Start a session with default transition settings.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_config(items, TransitionConfig::default())
    }

    /// Start a session. An empty list starts exhausted and completes at once.
    pub fn with_config(items: Vec<Item>, config: TransitionConfig) -> Self {
        let mut session = Self {
            items,
            position: 0,
            drag_offset: Vec2::ZERO,
            transition: None,
            config,
            completion_fired: false,
            events: Vec::new(),
        };

        debug!(items = session.items.len(), "swipe session started");
        if session.items.is_empty() {
            session.fire_completion();
        }
        session
    }

    // ---- Read surface -------------------------------------------------

    pub fn state(&self) -> SessionState {
        if self.position < self.items.len() {
            SessionState::Active {
                position: self.position,
            }
        } else {
            SessionState::Exhausted
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state().is_exhausted()
    }

    /// Cursor position; equals `len()` once exhausted.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items not yet reviewed, including the current one.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// The item snapshot this session was created with.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item awaiting a decision.
    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.position)
    }

    /// The item shown behind the current card.
    pub fn next_item(&self) -> Option<&Item> {
        self.items.get(self.position + 1)
    }

    /// The card on top of the stack: the outgoing card while a transition
    /// is pending, otherwise the current item.
    pub fn displayed_item(&self) -> Option<&Item> {
        match &self.transition {
            Some(t) => self.items.get(t.outgoing_position),
            None => self.current_item(),
        }
    }

    /// One-based counter and total, e.g. `(3, 10)`, while active.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state() {
            SessionState::Active { position } => Some((position + 1, self.items.len())),
            SessionState::Exhausted => None,
        }
    }

    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    pub fn drag_feedback(&self) -> DragFeedback {
        DragFeedback::for_offset(self.drag_offset)
    }

    pub fn transition(&self) -> Option<&CardTransition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the completion signal has been emitted.
    pub fn completion_fired(&self) -> bool {
        self.completion_fired
    }

    /// Take all queued events.
    ///
    /// Only decisions that advance the cursor are queued, so an undrained
    /// queue holds at most one entry per item plus the completion.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- Input --------------------------------------------------------

    /// Track the in-flight drag offset of the current card.
    pub fn drag_to(&mut self, offset: Vec2) {
        if self.is_exhausted() {
            return;
        }
        self.settle_transition();
        self.drag_offset = offset;
    }

    /// Classify a finished drag and apply the outcome.
    ///
    /// Returns `None` when the session is exhausted.
    pub fn release(
        &mut self,
        drag: &DragEnd,
        classifier: &GestureClassifier,
        cart: &mut impl CartSink,
    ) -> Option<SwipeReport> {
        if self.is_exhausted() {
            return None;
        }
        let outcome = classifier.classify(drag);
        debug!(?drag, %outcome, "drag released");
        self.apply(outcome, cart)
    }

    /// Apply a discrete command (button or key).
    ///
    /// Returns `None` when the session is exhausted.
    pub fn command(
        &mut self,
        direction: SwipeDirection,
        cart: &mut impl CartSink,
    ) -> Option<SwipeReport> {
        self.apply(direction.outcome(), cart)
    }

    /// Apply an outcome. Gesture and command input both end up here.
    ///
    /// Returns `None` when the session is exhausted.
    pub fn apply(&mut self, outcome: SwipeOutcome, cart: &mut impl CartSink) -> Option<SwipeReport> {
        let position = match self.state() {
            SessionState::Active { position } => position,
            SessionState::Exhausted => {
                debug!(%outcome, "swipe ignored: session exhausted");
                return None;
            }
        };

        self.settle_transition();

        let Some(direction) = outcome.direction() else {
            self.drag_offset = Vec2::ZERO;
            debug!(position, "card snapped back");
            return Some(SwipeReport {
                outcome,
                position,
                committed: None,
                completed: false,
            });
        };

        let item = &self.items[position];
        let item_id = item.id.clone();

        let committed = if direction == SwipeDirection::Down {
            cart.add_item(item);
            self.events.push(SessionEvent::ItemCommitted {
                position,
                item_id: item_id.clone(),
            });
            debug!(position, item = %item_id, "item committed to cart");
            Some(item_id.clone())
        } else {
            self.events.push(SessionEvent::ItemDiscarded {
                position,
                item_id: item_id.clone(),
                direction,
            });
            debug!(position, item = %item_id, %direction, "item discarded");
            None
        };

        self.transition = Some(CardTransition {
            outgoing_position: position,
            outgoing_item: item_id,
            exit: ExitTrajectory::new(direction, self.config.exit_distance),
            delay_ms: self.config.advance_delay_ms,
        });
        self.drag_offset = Vec2::ZERO;

        let completed = self.advance();

        Some(SwipeReport {
            outcome,
            position,
            committed,
            completed,
        })
    }

    /// Complete the pending exit transition, making the next card interactive.
    pub fn finish_transition(&mut self) -> Option<CardTransition> {
        self.transition.take()
    }

    // ---- Internals ----------------------------------------------------

    fn settle_transition(&mut self) {
        if let Some(t) = self.transition.take() {
            debug!(position = t.outgoing_position, "pending transition settled early");
        }
    }

    /// Move the cursor forward. Returns true when this move exhausted the session.
    fn advance(&mut self) -> bool {
        self.position += 1;
        if self.position < self.items.len() {
            return false;
        }
        self.fire_completion()
    }

    fn fire_completion(&mut self) -> bool {
        if self.completion_fired {
            return false;
        }
        self.completion_fired = true;
        self.events.push(SessionEvent::Completed {
            reviewed: self.items.len(),
        });
        info!(reviewed = self.items.len(), "swipe session complete");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_commerce::cart::CartStore;
    use swipe_commerce::money::{Currency, Money};

    fn items(prices: &[i64]) -> Vec<Item> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Item::new(
                    format!("item-{}", i + 1),
                    format!("Item {}", i + 1),
                    Money::from_major(*p, Currency::UAH),
                    "seafood",
                )
            })
            .collect()
    }

    #[test]
    fn test_new_session_is_active() {
        let session = SwipeSession::new(items(&[1, 2]));
        assert_eq!(session.state(), SessionState::Active { position: 0 });
        assert_eq!(session.current_item().map(|i| i.id.as_str()), Some("item-1"));
        assert_eq!(session.next_item().map(|i| i.id.as_str()), Some("item-2"));
        assert_eq!(session.progress(), Some((1, 2)));
        assert!(!session.completion_fired());
    }

    #[test]
    fn test_empty_session_completes_at_construction() {
        let mut session = SwipeSession::new(Vec::new());
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(session.completion_fired());
        assert_eq!(session.drain_events(), vec![SessionEvent::Completed { reviewed: 0 }]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_commit_adds_to_cart_synchronously() {
        let mut session = SwipeSession::new(items(&[100, 200]));
        let mut cart = CartStore::new(Currency::UAH);

        let report = session.command(SwipeDirection::Down, &mut cart).unwrap();
        assert_eq!(report.outcome, SwipeOutcome::CommitDown);
        assert_eq!(report.committed, Some(ItemId::new("item-1")));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(session.position(), 1);
        assert!(session.is_transitioning());
    }

    #[test]
    fn test_discard_does_not_touch_cart() {
        let mut session = SwipeSession::new(items(&[100, 200]));
        let mut cart = CartStore::new(Currency::UAH);

        session.command(SwipeDirection::Right, &mut cart);
        session.command(SwipeDirection::Left, &mut cart);
        assert!(cart.is_empty());
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_snap_back_keeps_position_and_resets_offset() {
        let mut session = SwipeSession::new(items(&[100]));
        let mut cart = CartStore::new(Currency::UAH);

        session.drag_to(Vec2::new(40.0, 10.0));
        assert_eq!(session.drag_offset(), Vec2::new(40.0, 10.0));

        let report = session
            .release(&DragEnd::new(40.0, 10.0, 0.0, 0.0), &GestureClassifier::default(), &mut cart)
            .unwrap();
        assert_eq!(report.outcome, SwipeOutcome::SnapBack);
        assert_eq!(session.position(), 0);
        assert!(session.drag_offset().is_zero());
        assert!(!session.is_transitioning());
        assert!(cart.is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_remaining_counts_down_to_zero() {
        let mut session = SwipeSession::new(items(&[1, 2, 3]));
        let mut cart = CartStore::new(Currency::UAH);
        assert_eq!(session.remaining(), 3);

        for dir in [SwipeDirection::Down, SwipeDirection::Left, SwipeDirection::Right] {
            session.command(dir, &mut cart);
            assert_eq!(session.remaining(), session.len() - session.position());
        }
        assert_eq!(session.remaining(), 0);

        session.command(SwipeDirection::Down, &mut cart);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_repeated_snap_backs_queue_nothing() {
        let mut session = SwipeSession::new(items(&[1]));
        let mut cart = CartStore::new(Currency::UAH);
        let nudge = DragEnd::new(5.0, 5.0, 0.0, 0.0);

        for _ in 0..1000 {
            session.release(&nudge, &GestureClassifier::default(), &mut cart);
        }
        assert!(session.drain_events().is_empty());
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut session = SwipeSession::new(items(&[1, 2]));
        let mut cart = CartStore::new(Currency::UAH);

        assert!(!session.command(SwipeDirection::Right, &mut cart).unwrap().completed);
        assert!(session.command(SwipeDirection::Right, &mut cart).unwrap().completed);
        assert!(session.command(SwipeDirection::Right, &mut cart).is_none());

        let completions = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_exhausted_ignores_everything() {
        let mut session = SwipeSession::new(items(&[1]));
        let mut cart = CartStore::new(Currency::UAH);
        session.command(SwipeDirection::Down, &mut cart);
        session.finish_transition();
        session.drain_events();

        session.drag_to(Vec2::new(10.0, 0.0));
        assert!(session.drag_offset().is_zero());
        assert!(session.command(SwipeDirection::Down, &mut cart).is_none());
        assert!(session
            .release(&DragEnd::new(0.0, 500.0, 0.0, 0.0), &GestureClassifier::default(), &mut cart)
            .is_none());
        assert_eq!(cart.total_items(), 1);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_displayed_item_follows_transition() {
        let mut session = SwipeSession::new(items(&[1, 2]));
        let mut cart = CartStore::new(Currency::UAH);

        session.command(SwipeDirection::Left, &mut cart);
        assert_eq!(session.displayed_item().map(|i| i.id.as_str()), Some("item-1"));
        assert_eq!(session.current_item().map(|i| i.id.as_str()), Some("item-2"));

        let transition = session.finish_transition().unwrap();
        assert_eq!(transition.outgoing_position, 0);
        assert_eq!(transition.exit.target, Vec2::new(-1000.0, 0.0));
        assert_eq!(transition.delay_ms, 200);
        assert_eq!(session.displayed_item().map(|i| i.id.as_str()), Some("item-2"));
    }

    #[test]
    fn test_new_swipe_settles_pending_transition() {
        let mut session = SwipeSession::new(items(&[1, 2, 3]));
        let mut cart = CartStore::new(Currency::UAH);

        session.command(SwipeDirection::Right, &mut cart);
        session.command(SwipeDirection::Down, &mut cart);

        let transition = session.transition().unwrap();
        assert_eq!(transition.outgoing_position, 1);
        assert_eq!(transition.exit.direction, SwipeDirection::Down);
    }

    #[test]
    fn test_events_record_decisions() {
        let mut session = SwipeSession::new(items(&[1, 2]));
        let mut cart = CartStore::new(Currency::UAH);

        session.command(SwipeDirection::Down, &mut cart);
        session.command(SwipeDirection::Right, &mut cart);

        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::ItemCommitted {
                    position: 0,
                    item_id: ItemId::new("item-1"),
                },
                SessionEvent::ItemDiscarded {
                    position: 1,
                    item_id: ItemId::new("item-2"),
                    direction: SwipeDirection::Right,
                },
                SessionEvent::Completed { reviewed: 2 },
            ]
        );
    }
}
