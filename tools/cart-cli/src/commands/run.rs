//! One-shot dispatch of a list of actions.

use anyhow::Result;

use super::{resolve_all, RunArgs};
use crate::context::Context;

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let actions = resolve_all(&args.actions, &catalog)?;
    ctx.output.debug(&format!("Dispatching {} action(s)", actions.len()));

    let mut store = ctx.store();
    if args.steps && !ctx.output.is_json() {
        let output = ctx.output.clone();
        store.subscribe_fn(move |d| {
            output.info(&format!("{}: {}", d.sequence, d.action.kind()));
            output.cart(d.current);
        });
    }

    let cart = store.dispatch_all(actions);

    if !args.steps || ctx.output.is_json() {
        ctx.output.cart(cart);
    }
    Ok(())
}
