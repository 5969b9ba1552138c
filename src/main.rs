//! Checkout till CLI
//!
//! Scans item names from the command line (or a default shopping list when
//! none are given), prices them against the catalogue offers, and prints a
//! one-line summary.
//!
//! Use `--breakdown` to print a per-offer breakdown table before the summary.

use std::io;

use anyhow::Result;
use clap::Parser;

use till::{basket::Basket, products::resolve_all};

/// Shopping list used when no item names are passed on the command line.
const DEFAULT_SHOPPING_LIST: [&str; 5] = ["Apple", "Apple", "Orange", "Apple", "Apple"];

/// Arguments for the checkout till
#[derive(Debug, Parser)]
struct TillArgs {
    /// Item names to scan; case-insensitive, unrecognised names are skipped
    items: Vec<String>,

    /// Print a per-offer breakdown table before the summary line
    #[clap(short, long)]
    breakdown: bool,
}

#[expect(clippy::print_stdout, reason = "CLI output")]
fn main() -> Result<()> {
    let args = TillArgs::parse();

    let mut basket = Basket::new();

    if args.items.is_empty() {
        basket.add(resolve_all(DEFAULT_SHOPPING_LIST));
    } else {
        basket.add(resolve_all(&args.items));
    }

    let receipt = basket.checkout();

    if args.breakdown {
        let stdout = io::stdout();
        receipt.write_to(stdout.lock())?;
    }

    println!(
        "{} items in cart coming to a total of {}",
        receipt.item_count(),
        receipt.total()
    );

    Ok(())
}
