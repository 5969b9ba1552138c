//! Products

use std::{fmt, str::FromStr};

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency used for all catalogue prices.
pub const CURRENCY: &Currency = iso::GBP;

/// A product from the fixed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// An apple, priced at 60p.
    Apple,

    /// An orange, priced at 25p.
    Orange,
}

/// Error returned when an item name does not resolve to a catalogue product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognised product name: {0:?}")]
pub struct UnknownProduct(String);

impl Product {
    /// Every product in the catalogue.
    pub const ALL: [Product; 2] = [Product::Apple, Product::Orange];

    /// Unit price in pence.
    pub const fn unit_price_minor(self) -> i64 {
        match self {
            Product::Apple => 60,
            Product::Orange => 25,
        }
    }

    /// Unit price of the product.
    pub fn unit_price(self) -> Money<'static, Currency> {
        Money::from_minor(self.unit_price_minor(), CURRENCY)
    }

    /// Catalogue identifier, as matched during name resolution.
    pub const fn identifier(self) -> &'static str {
        match self {
            Product::Apple => "APPLE",
            Product::Orange => "ORANGE",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Product {
    type Err = UnknownProduct;

    /// Matches the catalogue identifier case-insensitively, ignoring leading
    /// and trailing whitespace. No partial or fuzzy matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Product::ALL
            .into_iter()
            .find(|product| product.identifier().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownProduct(s.to_string()))
    }
}

/// Resolve an item name to a catalogue product.
///
/// Unrecognised names are an expected condition, not an error, and resolve to
/// `None`.
pub fn resolve(name: &str) -> Option<Product> {
    name.parse().ok()
}

/// Resolve a sequence of item names against the catalogue.
///
/// The output holds one entry per input name, in input order, so callers keep
/// positional correspondence; unrecognised names resolve to `None`.
pub fn resolve_all<I>(names: I) -> Vec<Option<Product>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| resolve(name.as_ref()))
        .collect()
}
