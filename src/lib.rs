//! Till
//!
//! Till is a small checkout pricing engine: it resolves scanned item names
//! against a fixed product catalogue, accumulates the recognised items into a
//! basket, and prices the basket with a set of multibuy offers.

pub mod basket;
pub mod offers;
pub mod prelude;
pub mod products;
pub mod receipt;
