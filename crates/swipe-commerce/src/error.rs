//! Catalog error types.
//!
//! Cart and catalog lookups are total; only loading catalog data from
//! disk can fail.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML.
    #[error("Failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Catalog file is not valid JSON.
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Two items share an identifier.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// Two categories share an identifier.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// An item references a category that is not defined.
    #[error("Item {item} references unknown category {category}")]
    UnknownCategory { item: String, category: String },

    /// Items are priced in more than one currency.
    #[error("Currency mismatch on item {item}: expected {expected}, got {got}")]
    CurrencyMismatch {
        item: String,
        expected: String,
        got: String,
    },

    /// An item has a negative price.
    #[error("Item {0} has a negative price")]
    NegativePrice(String),

    /// An item's price is not a finite amount representable in minor units.
    #[error("Item {item} has an invalid price: {price}")]
    InvalidPrice { item: String, price: String },
}
