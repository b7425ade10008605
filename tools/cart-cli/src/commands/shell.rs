//! Interactive cart shell.
//!
//! Each line is one user action. The cart is re-rendered by a store
//! observer after every dispatch.

use std::io::BufRead;

use anyhow::Result;
use cart_core::{action::ActionCommand, catalog::Catalog, store::CartStore};
use dialoguer::Input;

use super::ShellArgs;
use crate::context::Context;

const HELP: &str = "add <id> | remove <id> | inc <id> (+<id>) | dec <id> (-<id>) | clear | catalog | cart | help | quit";

/// What a shell line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Dispatched,
    ShowCatalog,
    ShowCart,
    Help,
    Quit,
    Skip,
    Invalid(String),
}

/// Run the shell command.
pub fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = ctx.store();

    let render = ctx.output.clone();
    store.subscribe_fn(move |d| render.cart(d.current));

    if !args.no_catalog {
        ctx.output.catalog(&catalog);
    }
    ctx.output.info(HELP);

    let interactive = console::user_attended();
    let mut piped = (!interactive).then(|| std::io::stdin().lock().lines());

    loop {
        let line = if interactive {
            match Input::<String>::new()
                .with_prompt("cart")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(e) => {
                    ctx.output.debug(&format!("Input closed: {}", e));
                    break;
                }
            }
        } else {
            match piped.as_mut().and_then(|lines| lines.next()) {
                Some(line) => line?,
                None => break,
            }
        };

        match handle_line(&line, &catalog, &mut store) {
            Step::Dispatched | Step::Skip => {}
            Step::ShowCatalog => ctx.output.catalog(&catalog),
            Step::ShowCart => ctx.output.cart(store.state()),
            Step::Help => ctx.output.info(HELP),
            Step::Quit => break,
            Step::Invalid(msg) => ctx.output.warn(&msg),
        }
    }

    ctx.output.debug(&format!("{} action(s) dispatched", store.dispatch_count()));
    Ok(())
}

fn handle_line(line: &str, catalog: &Catalog, store: &mut CartStore) -> Step {
    match line.trim().to_lowercase().as_str() {
        "" => Step::Skip,
        "catalog" | "list" => Step::ShowCatalog,
        "cart" | "show" => Step::ShowCart,
        "help" | "?" => Step::Help,
        "quit" | "exit" | "q" => Step::Quit,
        input => match ActionCommand::parse(input).and_then(|cmd| cmd.resolve(catalog)) {
            Ok(action) => {
                store.dispatch(action);
                Step::Dispatched
            }
            Err(e) => Step::Invalid(e.to_string()),
        },
    }
}
