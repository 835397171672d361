//! Interactive swipe browser.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Select};
use swipe_commerce::cart::CartStore;
use swipe_commerce::catalog::{CatalogProvider, StaticCatalog};
use swipe_deck::{CategorySelector, SessionEvent, SwipeDirection};

use super::BrowseArgs;
use crate::context::Context;

/// What the user picked from a menu.
#[derive(Clone, Copy)]
enum Action {
    Swipe(SwipeDirection),
    SwitchCategory,
    StartOver,
    ViewCart,
    Quit,
}

const ACTIVE_MENU: [(&str, Action); 6] = [
    ("← Skip", Action::Swipe(SwipeDirection::Left)),
    ("↓ Add to cart", Action::Swipe(SwipeDirection::Down)),
    ("→ Next", Action::Swipe(SwipeDirection::Right)),
    ("Switch category", Action::SwitchCategory),
    ("View cart", Action::ViewCart),
    ("Quit", Action::Quit),
];

const EXHAUSTED_MENU: [(&str, Action); 4] = [
    ("Switch category", Action::SwitchCategory),
    ("Start over", Action::StartOver),
    ("View cart", Action::ViewCart),
    ("Quit", Action::Quit),
];

/// Swipe through categories until the user quits.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive; use `sushi-swipe play --json` for scripted runs");
    }

    let mut selector = ctx.selector(args.category.as_deref())?;
    let mut cart = CartStore::new(selector.provider().currency());

    loop {
        print_header(&selector, &cart, ctx);

        let session = selector.session();
        let menu: &[(&str, Action)] = match session.current_item() {
            Some(item) => {
                ctx.output.card(item, session.next_item(), session.progress());
                &ACTIVE_MENU
            }
            None => {
                ctx.output.info("You've seen everything in this category.");
                &EXHAUSTED_MENU
            }
        };

        let labels: Vec<&str> = menu.iter().map(|(label, _)| *label).collect();
        let Some(choice) = Select::new()
            .with_prompt("Swipe")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match menu[choice].1 {
            Action::Swipe(direction) => swipe(&mut selector, &mut cart, direction, ctx).await,
            Action::SwitchCategory => switch_category(&mut selector, ctx)?,
            Action::StartOver => selector.restart(),
            Action::ViewCart => cart_screen(&mut cart, ctx)?,
            Action::Quit => break,
        }
    }

    if !cart.is_empty() {
        ctx.output.header("Cart");
        ctx.output.cart(&cart.summary());
    }

    Ok(())
}

fn print_header(selector: &CategorySelector<StaticCatalog>, cart: &CartStore, ctx: &Context) {
    let title = selector
        .active_category()
        .map(|c| c.label())
        .unwrap_or_else(|| selector.active_category_id().to_string());
    ctx.output.header(&format!(
        "{}   🛒 {} · {}",
        title,
        cart.total_items(),
        cart.total_price().display()
    ));
}

async fn swipe(
    selector: &mut CategorySelector<StaticCatalog>,
    cart: &mut CartStore,
    direction: SwipeDirection,
    ctx: &Context,
) {
    let session = selector.session_mut();
    let Some(item) = session.current_item().cloned() else {
        return;
    };
    let Some(report) = session.command(direction, cart) else {
        return;
    };
    ctx.output.outcome(&item, report.outcome);

    // The cart already holds the item; the delay only paces the card hand-over.
    if let Some(transition) = session.transition() {
        let pb = ctx.output.progress(session.len() as u64, "reviewed");
        pb.set_position(session.position() as u64);
        tokio::time::sleep(transition.delay()).await;
        pb.abandon();
        session.finish_transition();
    }

    for event in session.drain_events() {
        if let SessionEvent::Completed { reviewed } = event {
            ctx.output.success(&format!("All {} items reviewed", reviewed));
        }
    }
}

fn switch_category(selector: &mut CategorySelector<StaticCatalog>, ctx: &Context) -> Result<()> {
    let categories = selector.categories().to_vec();
    if categories.is_empty() {
        ctx.output.warn("The catalog has no categories");
        return Ok(());
    }

    let labels: Vec<String> = categories
        .iter()
        .map(|c| {
            format!(
                "{} ({})",
                c.label(),
                selector.provider().items_for(&c.id).len()
            )
        })
        .collect();
    let current = categories
        .iter()
        .position(|c| &c.id == selector.active_category_id())
        .unwrap_or(0);

    let Some(choice) = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact_opt()?
    else {
        return Ok(());
    };

    if !selector.select(categories[choice].id.clone()) {
        ctx.output.debug("Category unchanged");
    }
    Ok(())
}

fn cart_screen(cart: &mut CartStore, ctx: &Context) -> Result<()> {
    loop {
        ctx.output.header("Cart");
        ctx.output.cart(&cart.summary());
        if cart.is_empty() {
            return Ok(());
        }

        let mut labels: Vec<String> = cart
            .lines()
            .iter()
            .map(|line| format!("{} × {}", line.item.name, line.quantity))
            .collect();
        labels.push("Clear cart".to_string());
        labels.push("Back".to_string());

        let Some(choice) = Select::new()
            .with_prompt("Edit")
            .items(&labels)
            .default(labels.len() - 1)
            .interact_opt()?
        else {
            return Ok(());
        };

        let line_count = cart.lines().len();
        if choice == line_count {
            let confirmed = Confirm::new()
                .with_prompt("Remove everything from the cart?")
                .default(false)
                .interact()?;
            if confirmed {
                cart.clear();
                ctx.output.success("Cart cleared");
            }
            continue;
        }
        if choice > line_count {
            return Ok(());
        }

        let item_id = cart.lines()[choice].item.id.clone();
        let Some(edit) = Select::new()
            .with_prompt(labels[choice].as_str())
            .items(&["+1", "-1", "Remove", "Back"])
            .default(0)
            .interact_opt()?
        else {
            continue;
        };

        match edit {
            0 => cart.increment(&item_id),
            1 => cart.decrement(&item_id),
            2 => {
                cart.remove_item(&item_id);
            }
            _ => {}
        }
    }
}
