//! Scripted swipe replay.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use swipe_commerce::cart::{CartStore, CartSummary};
use swipe_commerce::catalog::CatalogProvider;
use swipe_deck::{DragEnd, SessionEvent, SessionState, SwipeDirection, SwipeReport};

use super::PlayArgs;
use crate::context::Context;

/// One scripted input.
enum Step {
    Command(SwipeDirection),
    Drag(DragEnd),
}

#[derive(Serialize)]
struct PlayReport {
    category: String,
    swipes: Vec<SwipeReport>,
    ignored: usize,
    state: SessionState,
    events: Vec<SessionEvent>,
    cart: CartSummary,
}

/// Replay commands or drag measurements against one category.
pub async fn run(args: PlayArgs, ctx: &Context) -> Result<()> {
    let steps = load_steps(&args, ctx)?;
    if steps.is_empty() {
        bail!("Nothing to play. Pass --moves or --drags.");
    }

    let mut selector = ctx.selector(args.category.as_deref())?;
    let mut cart = CartStore::new(selector.provider().currency());
    let classifier = ctx.config.deck().classifier();

    let category = selector
        .active_category()
        .map(|c| c.label())
        .unwrap_or_else(|| selector.active_category_id().to_string());
    ctx.output.header(&category);

    let mut swipes = Vec::with_capacity(steps.len());
    let mut ignored = 0;

    for step in &steps {
        let session = selector.session_mut();
        let item = session.current_item().cloned();

        let report = match step {
            Step::Command(direction) => session.command(*direction, &mut cart),
            Step::Drag(drag) => {
                session.drag_to(drag.offset);
                session.release(drag, &classifier, &mut cart)
            }
        };

        let (Some(report), Some(item)) = (report, item) else {
            ignored += 1;
            continue;
        };
        ctx.output.outcome(&item, report.outcome);

        if let Some(transition) = session.transition() {
            if args.animate {
                tokio::time::sleep(transition.delay()).await;
            }
            session.finish_transition();
        }
        swipes.push(report);
    }

    if ignored > 0 {
        ctx.output
            .warn(&format!("{} input(s) arrived after the deck was exhausted", ignored));
    }

    let session = selector.session_mut();
    let state = session.state();
    let events = session.drain_events();

    if ctx.output.is_json() {
        ctx.output.json(&PlayReport {
            category: selector.active_category_id().to_string(),
            swipes,
            ignored,
            state,
            events,
            cart: cart.summary(),
        });
        return Ok(());
    }

    match state {
        SessionState::Active { position } => ctx.output.info(&format!(
            "Stopped at card {} of {} ({} left)",
            position + 1,
            selector.session().len(),
            selector.session().remaining()
        )),
        SessionState::Exhausted => ctx.output.success("All items reviewed"),
    }

    ctx.output.header("Cart");
    ctx.output.cart(&cart.summary());

    Ok(())
}

fn load_steps(args: &PlayArgs, ctx: &Context) -> Result<Vec<Step>> {
    if let Some(ref path) = args.drags {
        let path = ctx.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read drags file: {}", path.display()))?;
        let drags: Vec<DragEnd> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse drags file: {}", path.display()))?;
        return Ok(drags.into_iter().map(Step::Drag).collect());
    }

    Ok(args.moves.iter().copied().map(Step::Command).collect())
}
