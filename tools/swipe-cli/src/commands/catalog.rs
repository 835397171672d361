//! Catalog listing commands.

use anyhow::Result;
use serde::Serialize;
use swipe_commerce::catalog::CatalogProvider;

use super::ItemsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    name: &'a str,
    icon: &'a str,
    items: usize,
}

/// List categories with their deck sizes.
pub async fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let rows: Vec<CategoryRow<'_>> = catalog
        .categories()
        .iter()
        .map(|c| CategoryRow {
            id: c.id.as_str(),
            name: &c.name,
            icon: &c.icon,
            items: catalog.items_for(&c.id).len(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    for row in &rows {
        ctx.output
            .list_item(&format!("{} {} ({}) - {} items", row.icon, row.name, row.id, row.items));
    }

    Ok(())
}

/// List one category's items in deck order.
pub async fn items(args: ItemsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let category_id = ctx.initial_category(&catalog, args.category.as_deref());
    let items = catalog.items_for(&category_id);

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    let title = catalog
        .category(&category_id)
        .map(|c| c.label())
        .unwrap_or_else(|| category_id.to_string());
    ctx.output.header(&title);

    if items.is_empty() {
        ctx.output.warn(&format!("No items in category '{}'", category_id));
        return Ok(());
    }

    let widths = [16, 22, 10, 10];
    ctx.output.table_row(&["ID", "NAME", "WEIGHT", "PRICE"], &widths);
    for item in &items {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                item.name.as_str(),
                item.weight.as_str(),
                item.price.display().as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}
