//! Replay of a recorded action log.

use std::fs;

use anyhow::{Context as _, Result};
use cart_core::action::{Action, ActionKind};

use super::ReplayArgs;
use crate::context::Context;

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read action log: {}", path.display()))?;
    let actions = parse_log(&content)
        .with_context(|| format!("Failed to parse action log: {}", path.display()))?;

    let unrecognized = actions
        .iter()
        .filter(|a| a.kind() == ActionKind::Unrecognized)
        .count();
    if unrecognized > 0 {
        ctx.output.warn(&format!("{} unrecognized action(s) will be ignored", unrecognized));
    }

    ctx.output.debug(&format!("Replaying {} action(s)", actions.len()));
    let mut store = ctx.store();
    let cart = store.dispatch_all(actions);

    ctx.output.cart(cart);
    Ok(())
}

/// Parse a JSON array of wire-format actions.
fn parse_log(content: &str) -> Result<Vec<Action>> {
    Ok(serde_json::from_str(content)?)
}
