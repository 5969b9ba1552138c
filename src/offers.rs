//! Offers
//!
//! Multibuy offers are all instances of a single parametrised rule: for every
//! full group of `group_size` qualifying units in the basket, one unit is
//! free. A group size of 2 is buy-one-get-one-free; a group size of 3 is
//! three-for-the-price-of-two.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::products::{CURRENCY, Product};

/// The offers currently running at the till, in stable registration order.
pub const STANDARD_OFFERS: [Offer; 2] = [
    Offer::new("Buy one get one free on apples", Product::Apple, 2),
    Offer::new("Three for the price of two on oranges", Product::Orange, 3),
];

/// A multibuy offer on a single catalogue product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    name: &'static str,
    product: Product,
    group_size: usize,
}

impl Offer {
    /// Create a new multibuy offer.
    ///
    /// Every `group_size`-th unit of `product` in a basket is free.
    pub const fn new(name: &'static str, product: Product, group_size: usize) -> Self {
        assert!(group_size >= 2, "a multibuy group needs at least two units");

        Self {
            name,
            product,
            group_size,
        }
    }

    /// Human-readable offer name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The product this offer applies to.
    pub const fn product(&self) -> Product {
        self.product
    }

    /// Number of qualifying units that make up one application of the offer.
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Evaluate this offer against a basket snapshot.
    ///
    /// Every offer sees the complete, unmodified snapshot; evaluation never
    /// consumes items or affects other offers.
    pub fn evaluate(&self, items: &[Product]) -> OfferApplication {
        let qualifying = items.iter().filter(|item| **item == self.product).count();

        OfferApplication {
            offer: *self,
            times_applied: qualifying / self.group_size,
        }
    }
}

/// Outcome of evaluating one offer against one basket snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferApplication {
    offer: Offer,
    times_applied: usize,
}

impl OfferApplication {
    /// The offer that was evaluated.
    pub const fn offer(&self) -> &Offer {
        &self.offer
    }

    /// Number of times the offer's rule condition was satisfied.
    pub const fn times_applied(&self) -> usize {
        self.times_applied
    }

    /// Money saved for each application: one unit of the offer's product.
    pub fn saving_per_application(&self) -> Money<'static, Currency> {
        self.offer.product.unit_price()
    }

    /// Total saving in pence.
    pub fn total_saving_minor(&self) -> i64 {
        let times = i64::try_from(self.times_applied).unwrap_or(i64::MAX);

        times.saturating_mul(self.offer.product.unit_price_minor())
    }

    /// Total saving from this application.
    pub fn total_saving(&self) -> Money<'static, Currency> {
        Money::from_minor(self.total_saving_minor(), CURRENCY)
    }
}

/// Aggregate outcome of evaluating every registered offer against one basket
/// snapshot.
#[derive(Debug, Clone)]
pub struct AppliedOffers {
    applications: SmallVec<[OfferApplication; 4]>,
}

impl AppliedOffers {
    /// Per-offer applications, in offer registration order.
    pub fn applications(&self) -> &[OfferApplication] {
        &self.applications
    }

    /// Total savings across all offers, in pence.
    pub fn total_savings_minor(&self) -> i64 {
        self.applications
            .iter()
            .map(OfferApplication::total_saving_minor)
            .sum()
    }

    /// Total savings across all offers.
    pub fn total_savings(&self) -> Money<'static, Currency> {
        Money::from_minor(self.total_savings_minor(), CURRENCY)
    }
}

/// Evaluate every registered offer against the given basket snapshot.
pub fn apply_all_offers(items: &[Product]) -> AppliedOffers {
    AppliedOffers {
        applications: STANDARD_OFFERS
            .iter()
            .map(|offer| offer.evaluate(items))
            .collect(),
    }
}
