//! Basket

use rusty_money::{Money, iso::Currency};

use crate::{
    offers::apply_all_offers,
    products::{CURRENCY, Product},
    receipt::Receipt,
};

/// An ordered collection of recognised catalogue products.
///
/// Only resolved products can enter the basket; unrecognised names are
/// filtered out at the resolution boundary and never appear here.
#[derive(Debug, Default)]
pub struct Basket {
    items: Vec<Product>,
}

impl Basket {
    /// Create a new, empty basket.
    pub fn new() -> Self {
        Basket::default()
    }

    /// Create a new basket with the given items.
    pub fn with_items(items: impl Into<Vec<Product>>) -> Self {
        Basket {
            items: items.into(),
        }
    }

    /// Append the resolved candidates to the basket, in their given order.
    ///
    /// Unresolved (`None`) candidates are silently skipped; an empty input is
    /// a no-op.
    pub fn add(&mut self, candidates: impl IntoIterator<Item = Option<Product>>) {
        self.items.extend(candidates.into_iter().flatten());
    }

    /// The items in the basket, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal of the basket in pence, before any offers.
    pub fn subtotal_minor(&self) -> i64 {
        self.items.iter().map(|item| item.unit_price_minor()).sum()
    }

    /// Subtotal of the basket, before any offers.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        Money::from_minor(self.subtotal_minor(), CURRENCY)
    }

    /// Total cost of the basket after evaluating every registered offer.
    pub fn total(&self) -> Money<'static, Currency> {
        let savings = apply_all_offers(&self.items).total_savings_minor();

        Money::from_minor(self.subtotal_minor() - savings, CURRENCY)
    }

    /// Price the current basket snapshot and produce a receipt.
    pub fn checkout(&self) -> Receipt {
        Receipt::from_basket(self)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::Money;

    use super::*;

    #[test]
    fn new_basket_is_empty() {
        let basket = Basket::new();

        assert!(basket.is_empty());
        assert_eq!(basket.len(), 0);
        assert_eq!(basket.subtotal(), Money::from_minor(0, CURRENCY));
        assert_eq!(basket.total(), Money::from_minor(0, CURRENCY));
    }

    #[test]
    fn add_skips_unresolved_candidates() {
        let mut basket = Basket::new();

        basket.add([
            None,
            Some(Product::Apple),
            None,
            Some(Product::Orange),
            Some(Product::Orange),
        ]);

        assert_eq!(basket.len(), 3);
        assert_eq!(
            basket.items(),
            &[Product::Apple, Product::Orange, Product::Orange]
        );
    }

    #[test]
    fn add_of_only_unresolved_candidates_is_a_no_op() {
        let mut basket = Basket::new();

        basket.add([None, None]);

        assert!(basket.is_empty());
        assert_eq!(basket.total(), Money::from_minor(0, CURRENCY));
    }

    #[test]
    fn add_of_nothing_is_a_no_op() {
        let mut basket = Basket::new();

        basket.add([]);

        assert!(basket.is_empty());
    }

    #[test]
    fn add_preserves_relative_order() {
        let mut basket = Basket::with_items([Product::Apple]);

        basket.add([Some(Product::Orange), None, Some(Product::Apple)]);

        assert_eq!(
            basket.items(),
            &[Product::Apple, Product::Orange, Product::Apple]
        );
    }

    #[test]
    fn subtotal_sums_unit_prices() {
        let basket = Basket::with_items([Product::Apple, Product::Orange, Product::Orange]);

        assert_eq!(basket.subtotal(), Money::from_minor(110, CURRENCY));
    }

    #[test]
    fn total_of_a_single_apple_has_no_discount() {
        let basket = Basket::with_items([Product::Apple]);

        assert_eq!(basket.total(), Money::from_minor(60, CURRENCY));
    }

    #[test]
    fn total_applies_bogof_on_apples() {
        let basket = Basket::with_items([Product::Apple, Product::Apple]);

        assert_eq!(basket.subtotal(), Money::from_minor(120, CURRENCY));
        assert_eq!(basket.total(), Money::from_minor(60, CURRENCY));
    }

    #[test]
    fn total_applies_three_for_two_on_oranges() {
        let basket = Basket::with_items([Product::Orange; 3]);

        assert_eq!(basket.subtotal(), Money::from_minor(75, CURRENCY));
        assert_eq!(basket.total(), Money::from_minor(50, CURRENCY));
    }

    #[test]
    fn total_of_a_mixed_basket_combines_offers() {
        let mut basket = Basket::with_items(vec![Product::Orange; 6]);
        basket.add([Some(Product::Apple); 4]);

        assert_eq!(basket.subtotal(), Money::from_minor(390, CURRENCY));
        assert_eq!(basket.total(), Money::from_minor(220, CURRENCY));
    }
}
