//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the summary snapshot.

mod store;

pub use store::{CartLine, CartSink, CartStore, CartSummary, CartSummaryLine};
