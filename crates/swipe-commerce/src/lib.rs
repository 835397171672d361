//! Catalog and cart domain types for SushiSwipe.
//!
//! This crate provides the data side of the swipe browser:
//!
//! - **Catalog**: Items, categories, and the static catalog provider
//! - **Cart**: The cart store that aggregates committed items into lines
//!
//! # Example
//!
//! ```rust
//! use swipe_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::builtin();
//! let mut cart = CartStore::new(catalog.currency());
//!
//! for item in catalog.items_for(&CategoryId::new("seafood")).iter().take(2) {
//!     cart.add_item(item);
//! }
//!
//! assert_eq!(cart.total_items(), 2);
//! println!("Total: {}", cart.total_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogProvider, Category, Item, StaticCatalog};

    // Cart
    pub use crate::cart::{CartLine, CartSink, CartStore, CartSummary};
}
