//! Cart CLI - a terminal shopping cart.
//!
//! Commands:
//! - `cart catalog` - List catalog items
//! - `cart run` - Dispatch a list of actions and print the cart
//! - `cart shell` - Interactive cart
//! - `cart replay` - Dispatch a recorded JSON action log
//! - `cart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, ReplayArgs, RunArgs, ShellArgs};

/// Cart CLI - Browse the catalog and manage a shopping cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items
    Catalog(CatalogArgs),

    /// Dispatch actions and print the resulting cart
    Run(RunArgs),

    /// Start an interactive cart session
    Shell(ShellArgs),

    /// Dispatch actions from a JSON action log
    Replay(ReplayArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Shell(args) => commands::shell::run(args, &ctx),
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["cart", "--json", "run", "add:1", "inc:1", "--steps"]);
        assert!(cli.json);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.actions, vec!["add:1", "inc:1"]);
                assert!(args.steps);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_requires_actions() {
        assert!(Cli::try_parse_from(["cart", "run"]).is_err());
    }
}
