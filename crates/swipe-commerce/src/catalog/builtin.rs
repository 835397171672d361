//! Built-in sushi ingredient catalog.

use crate::catalog::{Category, Item};
use crate::money::{Currency, Money};

/// Currency of the built-in catalog.
pub const BUILTIN_CURRENCY: Currency = Currency::UAH;

/// The three built-in categories, in tab order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("seaweed", "Seaweed", "\u{1f33f}"),
        Category::new("salads", "Salads", "\u{1f957}"),
        Category::new("seafood", "Seafood", "\u{1f990}"),
    ]
}

/// All built-in items, grouped by category in deck order.
pub fn items() -> Vec<Item> {
    let uah = |amount| Money::from_major(amount, BUILTIN_CURRENCY);

    vec![
        Item::new("nori-gold", "Nori Gold", uah(189), "seaweed")
            .with_description("Roasted nori sheets, premium grade, for rolls and onigiri")
            .with_weight("10 sheets")
            .with_image("/images/nori-gold.jpg"),
        Item::new("nori-half", "Nori Half Sheets", uah(129), "seaweed")
            .with_description("Pre-cut half sheets for hosomaki and temaki")
            .with_weight("20 sheets")
            .with_image("/images/nori-half.jpg"),
        Item::new("kombu", "Dashi Kombu", uah(215), "seaweed")
            .with_description("Dried kelp for dashi stock and seasoned rice")
            .with_weight("100 g")
            .with_image("/images/kombu.jpg"),
        Item::new("wakame-dried", "Dried Wakame", uah(95), "seaweed")
            .with_description("Cut wakame that rehydrates in minutes")
            .with_weight("50 g")
            .with_image("/images/wakame-dried.jpg"),
        Item::new("chuka", "Chuka Salad", uah(145), "salads")
            .with_description("Marinated wakame with sesame and chili")
            .with_weight("200 g")
            .with_image("/images/chuka.jpg"),
        Item::new("hiyashi-kani", "Kani Salad", uah(175), "salads")
            .with_description("Crab sticks, cucumber and spicy mayo")
            .with_weight("200 g")
            .with_image("/images/kani.jpg"),
        Item::new("kaiso", "Kaiso Mix", uah(160), "salads")
            .with_description("Mixed seaweed salad with ponzu dressing")
            .with_weight("180 g")
            .with_image("/images/kaiso.jpg"),
        Item::new("salmon-fillet", "Salmon Fillet", uah(520), "seafood")
            .with_description("Sashimi-grade Atlantic salmon, skin off")
            .with_weight("300 g")
            .with_image("/images/salmon.jpg"),
        Item::new("tuna-loin", "Yellowfin Tuna", uah(610), "seafood")
            .with_description("Deep red loin cut for nigiri and tekkamaki")
            .with_weight("250 g")
            .with_image("/images/tuna.jpg"),
        Item::new("ebi", "Ebi Shrimp", uah(340), "seafood")
            .with_description("Butterflied cooked shrimp, ready for nigiri")
            .with_weight("20 pcs")
            .with_image("/images/ebi.jpg"),
        Item::new("unagi", "Unagi", uah(450), "seafood")
            .with_description("Grilled freshwater eel glazed with kabayaki sauce")
            .with_weight("200 g")
            .with_image("/images/unagi.jpg"),
        Item::new("tobiko", "Tobiko Red", uah(230), "seafood")
            .with_description("Flying fish roe for uramaki coating")
            .with_weight("100 g")
            .with_image("/images/tobiko.jpg"),
    ]
}
