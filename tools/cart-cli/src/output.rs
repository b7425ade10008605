//! Output formatting for the CLI.

use cart_core::{cart::Cart, catalog::Catalog};
use console::style;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the catalog, or its JSON form.
    pub fn catalog(&self, catalog: &Catalog) {
        if self.json {
            self.json(catalog);
            return;
        }

        self.header("Catalog");
        for row in catalog_rows(catalog) {
            println!("  {}", row);
        }
    }

    /// Print the cart, or its JSON form.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            self.json(cart);
            return;
        }

        self.header("Cart");
        if cart.is_empty() {
            println!("  {}", style("(empty)").dim());
            return;
        }
        for row in cart_rows(cart) {
            println!("  {}", row);
        }
        println!(
            "  {}",
            style(format!("{} item(s) in {} line(s)", cart.item_count(), cart.len())).dim()
        );
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 18;
const PRICE_WIDTH: usize = 8;

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Plain catalog lines: id, name and price.
pub fn catalog_rows(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|item| {
            format_row(
                &[
                    format!("#{}", item.id).as_str(),
                    item.name.as_str(),
                    format!("${}", item.price).as_str(),
                ],
                &[ID_WIDTH, NAME_WIDTH, PRICE_WIDTH],
            )
        })
        .collect()
}

/// Plain cart lines: id, name, price and quantity.
pub fn cart_rows(cart: &Cart) -> Vec<String> {
    cart.iter()
        .map(|line| {
            format_row(
                &[
                    format!("#{}", line.id).as_str(),
                    line.name.as_str(),
                    format!("${}", line.price).as_str(),
                    format!("x{}", line.quantity).as_str(),
                ],
                &[ID_WIDTH, NAME_WIDTH, PRICE_WIDTH, 0],
            )
        })
        .collect()
}
