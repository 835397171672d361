//! End-to-end swipe scenarios against a real cart store.

use swipe_commerce::prelude::*;
use swipe_deck::prelude::*;

fn priced_items(prices: &[i64]) -> Vec<Item> {
    prices
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Item::new(
                format!("sku-{}", i + 1),
                format!("Product {}", i + 1),
                Money::from_major(*p, Currency::UAH),
                "seaweed",
            )
        })
        .collect()
}

#[test]
fn commit_discard_commit_totals() {
    let mut session = SwipeSession::new(priced_items(&[100, 200, 150]));
    let mut cart = CartStore::new(Currency::UAH);

    session.command(SwipeDirection::Down, &mut cart);
    session.command(SwipeDirection::Right, &mut cart);
    let last = session.command(SwipeDirection::Down, &mut cart).unwrap();

    assert!(last.completed);
    assert_eq!(cart.unique_item_count(), 2);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Money::from_major(250, Currency::UAH));
    assert_eq!(session.state(), SessionState::Exhausted);
}

#[test]
fn same_item_committed_twice_across_sessions() {
    let items = priced_items(&[120]);
    let mut cart = CartStore::new(Currency::UAH);

    for _ in 0..2 {
        let mut session = SwipeSession::new(items.clone());
        session.command(SwipeDirection::Down, &mut cart);
    }

    assert_eq!(cart.unique_item_count(), 1);
    assert_eq!(cart.quantity_of(&ItemId::new("sku-1")), Some(2));
    assert_eq!(cart.total_items(), 2);
}

#[test]
fn update_quantity_zero_drops_line_from_totals() {
    let mut session = SwipeSession::new(priced_items(&[100, 200]));
    let mut cart = CartStore::new(Currency::UAH);
    session.command(SwipeDirection::Down, &mut cart);
    session.command(SwipeDirection::Down, &mut cart);

    cart.update_quantity(&ItemId::new("sku-1"), 0);
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Money::from_major(200, Currency::UAH));
}

#[test]
fn gesture_and_button_paths_match() {
    let classifier = GestureClassifier::default();
    let items = priced_items(&[100, 200, 300]);

    let cases = [
        (DragEnd::new(160.0, 0.0, 0.0, 0.0), SwipeDirection::Right),
        (DragEnd::new(-20.0, 0.0, -650.0, 0.0), SwipeDirection::Left),
        (DragEnd::new(200.0, 90.0, 700.0, 0.0), SwipeDirection::Down),
    ];

    for (drag, direction) in cases {
        let mut gesture_session = SwipeSession::new(items.clone());
        let mut gesture_cart = CartStore::new(Currency::UAH);
        let mut button_session = SwipeSession::new(items.clone());
        let mut button_cart = CartStore::new(Currency::UAH);

        let a = gesture_session.release(&drag, &classifier, &mut gesture_cart);
        let b = button_session.command(direction, &mut button_cart);

        assert_eq!(a, b);
        assert_eq!(gesture_session.state(), button_session.state());
        assert_eq!(gesture_session.transition(), button_session.transition());
        assert_eq!(gesture_cart, button_cart);
        assert_eq!(gesture_session.drain_events(), button_session.drain_events());
    }
}

#[test]
fn empty_category_completes_immediately() {
    let mut selector = CategorySelector::new(StaticCatalog::builtin(), TransitionConfig::default());
    selector.select(CategoryId::new("no-such-category"));

    let session = selector.session_mut();
    assert_eq!(session.state(), SessionState::Exhausted);
    assert_eq!(session.drain_events(), vec![SessionEvent::Completed { reviewed: 0 }]);
}

#[test]
fn cart_survives_category_switches() {
    let catalog = StaticCatalog::builtin();
    let mut cart = CartStore::new(catalog.currency());
    let mut selector = CategorySelector::new(catalog, TransitionConfig::immediate());

    selector.session_mut().command(SwipeDirection::Down, &mut cart);
    selector.select(CategoryId::new("seafood"));
    selector.session_mut().command(SwipeDirection::Down, &mut cart);
    selector.select(CategoryId::new("seaweed"));

    assert_eq!(selector.session().position(), 0);
    assert_eq!(cart.total_items(), 2);
    let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
    assert_eq!(ids, vec!["nori-gold", "salmon-fillet"]);
}

#[test]
fn logical_state_commits_before_transition_finishes() {
    let mut session = SwipeSession::new(priced_items(&[100, 200]));
    let mut cart = CartStore::new(Currency::UAH);

    session.command(SwipeDirection::Down, &mut cart);

    assert!(session.is_transitioning());
    assert_eq!(cart.total_items(), 1);
    assert_eq!(session.position(), 1);
    assert_eq!(session.displayed_item().map(|i| i.id.as_str()), Some("sku-1"));

    session.finish_transition();
    assert_eq!(session.displayed_item().map(|i| i.id.as_str()), Some("sku-2"));
}
