//! Static catalog provider.
//!
//! The catalog is read-only for the lifetime of the process. Lookups never
//! fail: an unknown category yields an empty item list.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{builtin, Category, Item};
use crate::error::CatalogError;
use crate::ids::{CategoryId, ItemId};
use crate::money::{Currency, Money};

/// Source of categories and per-category item lists.
pub trait CatalogProvider {
    /// All categories, in display order.
    fn categories(&self) -> &[Category];

    /// Items of a category in deck order. Unknown categories yield an empty list.
    fn items_for(&self, category_id: &CategoryId) -> Vec<Item>;

    /// Currency all item prices are expressed in.
    fn currency(&self) -> Currency;

    /// Look up a category by id.
    fn category(&self, category_id: &CategoryId) -> Option<&Category> {
        self.categories().iter().find(|c| &c.id == category_id)
    }

    /// The category selected when browsing starts.
    fn default_category(&self) -> Option<&CategoryId> {
        self.categories().first().map(|c| &c.id)
    }
}

/// In-memory catalog built from static data.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    currency: Currency,
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl StaticCatalog {
    /// Build a catalog, validating ids, category references and currency.
    pub fn new(
        currency: Currency,
        categories: Vec<Category>,
        items: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.clone()) {
                return Err(CatalogError::DuplicateCategory(category.id.to_string()));
            }
        }

        let mut item_ids: HashSet<&ItemId> = HashSet::new();
        for item in &items {
            if !item_ids.insert(&item.id) {
                return Err(CatalogError::DuplicateItem(item.id.to_string()));
            }
            if !category_ids.contains(&item.category_id) {
                return Err(CatalogError::UnknownCategory {
                    item: item.id.to_string(),
                    category: item.category_id.to_string(),
                });
            }
            if item.price.currency != currency {
                return Err(CatalogError::CurrencyMismatch {
                    item: item.id.to_string(),
                    expected: currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
            if item.price.amount_minor < 0 {
                return Err(CatalogError::NegativePrice(item.id.to_string()));
            }
        }

        Ok(Self {
            currency,
            categories,
            items,
        })
    }

    /// The built-in three-category sushi catalog.
    pub fn builtin() -> Self {
        Self {
            currency: builtin::BUILTIN_CURRENCY,
            categories: builtin::categories(),
            items: builtin::items(),
        }
    }

    /// Load a catalog from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        file.into_catalog()
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        file.into_catalog()
    }

    /// Look up an item by id across all categories.
    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// All items across all categories.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for StaticCatalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn items_for(&self, category_id: &CategoryId) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| i.in_category(category_id))
            .cloned()
            .collect()
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}

/// On-disk catalog layout. Prices are written in major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Currency of every price in the file.
    #[serde(default)]
    pub currency: Currency,
    /// Categories in tab order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Items in deck order.
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One item as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in major units (e.g. 149.5).
    pub price: f64,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub image: String,
    pub category: CategoryId,
}

impl CatalogFile {
    /// Convert into a validated catalog.
    pub fn into_catalog(self) -> Result<StaticCatalog, CatalogError> {
        let currency = self.currency;
        let items = self
            .items
            .into_iter()
            .map(|r| r.into_item(currency))
            .collect::<Result<Vec<_>, _>>()?;
        StaticCatalog::new(currency, self.categories, items)
    }
}

impl ItemRecord {
    /// Convert a file record into an item priced in `currency`.
    ///
    /// The sign is checked before rounding so that tiny negative amounts
    /// cannot round to zero.
    fn into_item(self, currency: Currency) -> Result<Item, CatalogError> {
        if self.price < 0.0 {
            return Err(CatalogError::NegativePrice(self.id.to_string()));
        }
        let price = Money::from_decimal(self.price, currency).ok_or_else(|| {
            CatalogError::InvalidPrice {
                item: self.id.to_string(),
                price: self.price.to_string(),
            }
        })?;

        Ok(Item {
            id: self.id,
            name: self.name,
            description: self.description,
            price,
            weight: self.weight,
            image: self.image,
            category_id: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOML: &str = r#"
currency = "EUR"

[[categories]]
id = "rolls"
name = "Rolls"
icon = "R"

[[items]]
id = "california"
name = "California"
price = 9.5
category = "rolls"

[[items]]
id = "philadelphia"
name = "Philadelphia"
price = 11.0
weight = "8 pcs"
category = "rolls"
"#;

    #[test]
    fn test_builtin_has_three_categories() {
        let catalog = StaticCatalog::builtin();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["seaweed", "salads", "seafood"]);
        assert_eq!(catalog.default_category().map(|c| c.as_str()), Some("seaweed"));
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = StaticCatalog::builtin();
        let rebuilt = StaticCatalog::new(
            catalog.currency(),
            catalog.categories().to_vec(),
            catalog.items().to_vec(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_items_for_keeps_deck_order() {
        let catalog = StaticCatalog::builtin();
        let items = catalog.items_for(&CategoryId::new("seaweed"));
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id.as_str(), "nori-gold");
        assert!(items.iter().all(|i| i.category_id.as_str() == "seaweed"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = StaticCatalog::builtin();
        assert!(catalog.items_for(&CategoryId::new("desserts")).is_empty());
        assert!(catalog.category(&CategoryId::new("desserts")).is_none());
    }

    #[test]
    fn test_from_toml() {
        let catalog = StaticCatalog::from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(catalog.currency(), Currency::EUR);
        let rolls = catalog.items_for(&CategoryId::new("rolls"));
        assert_eq!(rolls.len(), 2);
        assert_eq!(rolls[0].price.amount_minor, 950);
        assert_eq!(rolls[1].weight, "8 pcs");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "currency": "USD",
            "categories": [{"id": "sides", "name": "Sides"}],
            "items": [{"id": "edamame", "name": "Edamame", "price": 4.25, "category": "sides"}]
        }"#;
        let catalog = StaticCatalog::from_json_str(json).unwrap();
        let item = catalog.item(&ItemId::new("edamame")).unwrap();
        assert_eq!(item.price, Money::new(425, Currency::USD));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let cats = vec![Category::new("a", "A", "")];
        let price = Money::from_major(1, Currency::UAH);
        let items = vec![Item::new("x", "X", price, "a"), Item::new("x", "X2", price, "a")];
        let err = StaticCatalog::new(Currency::UAH, cats, items).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem(id) if id == "x"));
    }

    #[test]
    fn test_unknown_item_category_rejected() {
        let cats = vec![Category::new("a", "A", "")];
        let items = vec![Item::new("x", "X", Money::from_major(1, Currency::UAH), "b")];
        let err = StaticCatalog::new(Currency::UAH, cats, items).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let cats = vec![Category::new("a", "A", "")];
        let items = vec![Item::new("x", "X", Money::from_major(1, Currency::USD), "a")];
        let err = StaticCatalog::new(Currency::UAH, cats, items).unwrap_err();
        assert!(matches!(err, CatalogError::CurrencyMismatch { .. }));
    }

    fn catalog_with_price(price: &str) -> Result<StaticCatalog, CatalogError> {
        StaticCatalog::from_toml_str(&format!(
            r#"
[[categories]]
id = "rolls"
name = "Rolls"

[[items]]
id = "futomaki"
name = "Futomaki"
price = {}
category = "rolls"
"#,
            price
        ))
    }

    #[test]
    fn test_non_finite_prices_rejected() {
        for price in ["nan", "inf", "1e300"] {
            let err = catalog_with_price(price).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPrice { ref item, .. } if item == "futomaki"),
                "price {} gave {:?}",
                price,
                err
            );
        }
    }

    #[test]
    fn test_negative_prices_rejected_before_rounding() {
        for price in ["-0.004", "-1.5", "-inf"] {
            let err = catalog_with_price(price).unwrap_err();
            assert!(
                matches!(err, CatalogError::NegativePrice(ref id) if id == "futomaki"),
                "price {} gave {:?}",
                price,
                err
            );
        }
    }

    #[test]
    fn test_zero_and_sub_minor_prices_accepted() {
        let catalog = catalog_with_price("0.004").unwrap();
        let item = catalog.item(&ItemId::new("futomaki")).unwrap();
        assert!(item.price.is_zero());
        assert!(catalog_with_price("0.0").is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, SAMPLE_TOML).unwrap();

        let catalog = StaticCatalog::load(&path).unwrap();
        assert_eq!(catalog.items().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StaticCatalog::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
