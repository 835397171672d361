//! Category types for grouping swipeable items.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A catalog category shown as a tab above the card stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon glyph (usually a single emoji).
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Tab label, icon first.
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let cat = Category::new("seafood", "Seafood", "\u{1f990}");
        assert_eq!(cat.label(), "\u{1f990} Seafood");
        assert_eq!(cat.id.as_str(), "seafood");
    }

    #[test]
    fn test_label_without_icon() {
        let cat = Category::new("misc", "Misc", "");
        assert_eq!(cat.label(), "Misc");
    }
}
