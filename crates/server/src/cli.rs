//! # CLI Commands
//!
//! One-shot `list` and `add` against the configured product store.

use anyhow::{Context, Result};
use catalog_core::{
    Catalog, CatalogConfig, DraftField, HttpProductStore, Product, ProductStore, SortKey,
    SortOrder,
};
use clap::Args;

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub allergen_info: String,
    #[arg(long)]
    pub cooking_instruction: String,
    #[arg(long)]
    pub cost_price: String,
    #[arg(long)]
    pub selling_price: String,
    /// Image URL
    #[arg(long)]
    pub image: String,
}

impl AddArgs {
    fn fields(self) -> [(DraftField, String); 7] {
        [
            (DraftField::Name, self.name),
            (DraftField::Description, self.description),
            (DraftField::AllergenInfo, self.allergen_info),
            (DraftField::CookingInstruction, self.cooking_instruction),
            (DraftField::CostPrice, self.cost_price),
            (DraftField::SellingPrice, self.selling_price),
            (DraftField::ProductImage, self.image),
        ]
    }
}

/// Drive the sort buttons until the session shows `key` in `order`
pub fn select_sort<S: ProductStore>(catalog: &mut Catalog<S>, key: SortKey, order: SortOrder) {
    if catalog.state().sort_key() != key {
        catalog.toggle_sort(key);
    }
    if catalog.state().sort_order() != order {
        catalog.toggle_sort(key);
    }
}

pub async fn list(
    config: &CatalogConfig,
    search: &str,
    sort: SortKey,
    desc: bool,
    json: bool,
) -> Result<()> {
    let store = HttpProductStore::new(config)?;
    let mut catalog = Catalog::with_config(store, config);

    catalog
        .load()
        .await
        .with_context(|| format!("Failed to load products from {}", config.products_url()))?;

    catalog.set_query(search);
    let order = if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    select_sort(&mut catalog, sort, order);

    let view = catalog.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_table(&view));
        println!(
            "{} of {} products",
            view.len(),
            catalog.state().products.len()
        );
    }
    Ok(())
}

pub async fn add(config: &CatalogConfig, args: AddArgs) -> Result<()> {
    let store = HttpProductStore::new(config)?;
    let mut catalog = Catalog::with_config(store, config);

    catalog.open_draft();
    for (field, value) in args.fields() {
        catalog.edit_draft(field, value);
    }

    let product = catalog.submit().await.context("Error adding product")?;
    println!("{}", serde_json::to_string_pretty(&product)?);
    Ok(())
}

fn render_table(products: &[&Product]) -> String {
    let mut out = format!("{:>8}  {:<32} {:>10} {:>10}\n", "ID", "NAME", "COST", "PRICE");
    for p in products {
        out.push_str(&format!(
            "{:>8}  {:<32} {:>10.2} {:>10.2}\n",
            p.id.to_string(),
            truncate(&p.name, 32),
            p.cost_price,
            p.selling_price
        ));
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CreateProductRequest, InMemoryProductStore, ProductId};

    fn request(name: &str, selling_price: f64) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: "d".to_string(),
            allergen_info: "a".to_string(),
            cooking_instruction: "c".to_string(),
            cost_price: 1.0,
            selling_price,
            product_image: "i".to_string(),
        }
    }

    #[tokio::test]
    async fn test_select_sort_reaches_requested_state() {
        let store = InMemoryProductStore::seeded(vec![request("Tea", 5.0), request("Coffee", 3.0)]);
        let mut catalog = Catalog::new(store);
        catalog.present().await;

        // Default key is id ascending; asking for it must not flip it
        select_sort(&mut catalog, SortKey::Id, SortOrder::Ascending);
        assert_eq!(catalog.state().sort_order(), SortOrder::Ascending);

        select_sort(&mut catalog, SortKey::SellingPrice, SortOrder::Descending);
        assert_eq!(catalog.state().sort_key(), SortKey::SellingPrice);
        assert_eq!(catalog.state().sort_order(), SortOrder::Descending);
        assert_eq!(catalog.view()[0].name, "Tea");
    }

    #[test]
    fn test_render_table() {
        let product = Product {
            id: ProductId::Number(3),
            name: "A very long product name that will not fit".to_string(),
            description: String::new(),
            allergen_info: String::new(),
            cooking_instruction: String::new(),
            cost_price: 1.5,
            selling_price: 4.0,
            product_image: String::new(),
        };
        let table = render_table(&[&product]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("A very long product name that..."));
        assert!(row.ends_with("1.50       4.00"));
    }
}
