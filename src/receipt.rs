//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    basket::Basket,
    offers::{AppliedOffers, apply_all_offers},
    products::CURRENCY,
};

/// Final receipt for a priced basket snapshot.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Number of items in the basket
    item_count: usize,

    /// Total cost before any offer applications
    subtotal: Money<'static, Currency>,

    /// Total amount paid for all items after any offer applications
    total: Money<'static, Currency>,

    /// Per-offer evaluation details
    offers: AppliedOffers,
}

impl Receipt {
    /// Price the given basket snapshot and build a receipt for it.
    pub fn from_basket(basket: &Basket) -> Self {
        let offers = apply_all_offers(basket.items());
        let subtotal_minor = basket.subtotal_minor();
        let total_minor = subtotal_minor - offers.total_savings_minor();

        Receipt {
            item_count: basket.len(),
            subtotal: Money::from_minor(subtotal_minor, CURRENCY),
            total: Money::from_minor(total_minor, CURRENCY),
            offers,
        }
    }

    /// Number of items that were priced.
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total cost before any offer applications.
    pub const fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Total amount paid for all items.
    pub const fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Savings made by applying offers.
    pub fn savings(&self) -> Money<'static, Currency> {
        self.offers.total_savings()
    }

    /// Per-offer evaluation details.
    pub const fn offers(&self) -> &AppliedOffers {
        &self.offers
    }

    /// Write a per-offer breakdown table and totals to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["Offer", "Applied", "Saving"]);

        for application in self.offers.applications() {
            builder.push_record([
                application.offer().name().to_string(),
                application.times_applied().to_string(),
                application.total_saving().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "Subtotal: {}", self.subtotal)?;
        writeln!(out, "Savings:  {}", self.savings())?;
        writeln!(out, "Total:    {}", self.total)?;

        Ok(())
    }
}
