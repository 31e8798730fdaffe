//! Cart commands.

use anyhow::Result;
use atelier_commerce::cart::Cart;
use atelier_commerce::ProductId;
use serde_json::json;

use super::catalog::find_product;
use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::{muted, price};

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let mut cart = Cart::load(&cache)?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {
            show_cart(ctx, &cart);
            return Ok(());
        }
        CartCommand::Add { id, quantity } => {
            let product = find_product(&id)?;
            cart.add_items(product, quantity);
            ctx.output
                .success(&format!("Added {} × {} to cart", quantity.max(1), product.name));
        }
        CartCommand::Remove { id } => {
            let product_id = ProductId::new(id);
            match cart.get_item(&product_id) {
                Some(item) => ctx.output.success(&format!("Removed {}", item.product.name)),
                None => ctx.output.warn(&format!("{} is not in the cart", product_id)),
            }
            cart.remove_item(&product_id);
        }
        CartCommand::Set { id, quantity } => {
            let product_id = ProductId::new(id);
            if !cart.contains(&product_id) {
                ctx.output.warn(&format!("{} is not in the cart", product_id));
            }
            cart.update_quantity(&product_id, quantity);
            ctx.output.debug(&format!("{} quantity -> {}", product_id, quantity));
        }
        CartCommand::Clear => {
            cart.clear();
            ctx.output.success("Cart cleared");
        }
    }

    cart.save(&cache)?;
    ctx.output.debug(&format!("{} item(s) in cart", cart.item_count()));

    if ctx.output.is_json() {
        show_cart(ctx, &cart);
    }
    Ok(())
}

/// The cart page.
pub fn show_cart(ctx: &Context, cart: &Cart) {
    let pricing = cart.pricing(&ctx.config.checkout.shipping_policy());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.items(),
            "item_count": cart.item_count(),
            "pricing": pricing,
        }));
        return;
    }

    ctx.output.header(&format!("Shopping Bag ({})", cart.item_count()));

    if cart.is_empty() {
        ctx.output.info("Your bag is empty");
        ctx.output.line(&format!("  {}", muted("Continue shopping: atelier open /")));
        return;
    }

    for item in cart.items() {
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &item.product.name,
                &format!("{} × {}", item.quantity, item.product.price.display()),
                &price(&item.line_total().display()),
            ],
            &[3, 24, 16, 10],
        );
    }

    ctx.output.line("");
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Shipping", &pricing.shipping_label());
    ctx.output.kv("Total", &price(&pricing.grand_total.display()));

    if let Some(remaining) = pricing.free_shipping_remaining {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            remaining.display()
        ));
    }
}
