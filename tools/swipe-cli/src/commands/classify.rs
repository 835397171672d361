//! Drag classification command.

use anyhow::Result;
use serde::Serialize;
use swipe_deck::{DragEnd, DragFeedback, GestureThresholds, SwipeOutcome};

use super::ClassifyArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Classification {
    drag: DragEnd,
    outcome: SwipeOutcome,
    feedback: DragFeedback,
    thresholds: GestureThresholds,
}

/// Classify a single drag measurement with the configured thresholds.
pub async fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let deck = ctx.config.deck();
    let classifier = deck.classifier();

    let drag = DragEnd::new(args.offset_x, args.offset_y, args.velocity_x, args.velocity_y);
    let result = Classification {
        drag,
        outcome: classifier.classify(&drag),
        feedback: DragFeedback::for_offset(drag.offset),
        thresholds: *classifier.thresholds(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output.header("Classification");
    ctx.output.kv("outcome", result.outcome.as_str());
    if let Some(direction) = result.outcome.direction() {
        ctx.output.kv("command", direction.as_str());
    }
    ctx.output
        .kv("rotation", &format!("{:.1}°", result.feedback.rotation_deg));
    ctx.output.kv("opacity", &format!("{:.2}", result.feedback.opacity));
    ctx.output.debug(&format!(
        "thresholds: horizontal {}/{} vertical {}/{}",
        result.thresholds.horizontal.distance,
        result.thresholds.horizontal.velocity,
        result.thresholds.vertical.distance,
        result.thresholds.vertical.velocity,
    ));

    Ok(())
}
