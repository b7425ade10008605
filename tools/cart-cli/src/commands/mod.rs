//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod replay;
pub mod run;
pub mod shell;

use anyhow::{Context as _, Result};
use cart_core::{action::Action, action::ActionCommand, catalog::Catalog};
use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show a single item.
    #[arg(long)]
    pub id: Option<u64>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Actions to dispatch in order, e.g. `add:1 add:3 inc:1 dec:3 clear`.
    #[arg(required = true)]
    pub actions: Vec<String>,

    /// Render the cart after every action.
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Don't print the catalog on start.
    #[arg(long)]
    pub no_catalog: bool,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of actions.
    pub file: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse and resolve shorthand commands against the catalog.
pub fn resolve_all(inputs: &[String], catalog: &Catalog) -> Result<Vec<Action>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            ActionCommand::parse(input)
                .and_then(|cmd| cmd.resolve(catalog))
                .with_context(|| format!("Action {} ({:?})", i + 1, input))
        })
        .collect()
}
