//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    offers::{AppliedOffers, Offer, OfferApplication, STANDARD_OFFERS, apply_all_offers},
    products::{CURRENCY, Product, UnknownProduct, resolve, resolve_all},
    receipt::Receipt,
};
