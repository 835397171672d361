//! Catalog item type.

use crate::ids::{CategoryId, ItemId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single catalog entry presentable in the swipe stack.
///
/// Items are built once from static catalog data and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Unit weight or size label (e.g. "250 g").
    pub weight: String,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Category this item belongs to.
    pub category_id: CategoryId,
}

impl Item {
    /// Create a new item with empty description, weight and image.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            weight: String::new(),
            image: String::new(),
            category_id: category_id.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the weight/size label.
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether this item belongs to the given category.
    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        &self.category_id == category_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_item_builder() {
        let item = Item::new("wakame", "Wakame", Money::from_major(95, Currency::UAH), "seaweed")
            .with_description("Dried wakame flakes")
            .with_weight("100 g")
            .with_image("/img/wakame.jpg");

        assert_eq!(item.id.as_str(), "wakame");
        assert_eq!(item.weight, "100 g");
        assert!(item.in_category(&CategoryId::new("seaweed")));
        assert!(!item.in_category(&CategoryId::new("seafood")));
    }
}
