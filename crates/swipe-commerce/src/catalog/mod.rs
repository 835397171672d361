//! Product catalog module.
//!
//! Contains items, categories, and the static catalog provider.

pub mod builtin;
mod category;
mod item;
mod provider;

pub use category::Category;
pub use item::Item;
pub use provider::{CatalogFile, CatalogProvider, ItemRecord, StaticCatalog};
