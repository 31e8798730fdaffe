//! Catalog browsing commands.

use anyhow::Result;
use atelier_commerce::catalog::{self, CategoryFilter, Product, RELATED_LIMIT};
use atelier_commerce::{CommerceError, ProductId};
use serde_json::json;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{muted, price};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List { category } => {
            show_listing(ctx, category);
            Ok(())
        }
        CatalogCommand::Show { id } => {
            let product = find_product(&id)?;
            show_product(ctx, product);
            Ok(())
        }
    }
}

/// Look up a product or fail with a not-found error.
pub fn find_product(id: &str) -> Result<&'static Product, CommerceError> {
    catalog::product(&ProductId::new(id)).ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
}

/// The product listing page.
pub fn show_listing(ctx: &Context, filter: CategoryFilter) {
    let products = catalog::filter(filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header("The Collection");
    let labels: Vec<String> = catalog::categories()
        .into_iter()
        .zip(CategoryFilter::labels())
        .map(|(f, label)| {
            if f == filter {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    ctx.output.line(&format!("  {}", muted(&labels.join("  "))));
    ctx.output.line("");

    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category.as_str(),
                &price(&product.price.display()),
            ],
            &[3, 24, 12, 10],
        );
    }
}

/// The product detail page.
pub fn show_product(ctx: &Context, product: &Product) {
    let related = catalog::related(product, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "product": product, "related": related }));
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("price", &price(&product.price.display()));
    ctx.output.kv("category", product.category.as_str());
    ctx.output.kv("image", &product.image);
    ctx.output.line("");
    ctx.output.line(&format!("  {}", product.description));

    if !related.is_empty() {
        ctx.output.header("You may also like");
        for item in related {
            ctx.output.list_item(&format!(
                "{} {} {}",
                item.name,
                price(&item.price.display()),
                muted(&item.path())
            ));
        }
    }
}
