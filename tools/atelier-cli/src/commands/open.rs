//! Route dispatch: render the page a storefront path points at.

use anyhow::Result;
use atelier_auth::AuthService;
use atelier_commerce::cart::Cart;
use atelier_commerce::catalog::{self, CategoryFilter};
use atelier_commerce::review::ReviewBoard;

use super::{auth, cart, catalog as catalog_cmd, checkout, review, OpenArgs};
use crate::context::Context;
use crate::route::Route;

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let route = Route::parse(&args.path);
    ctx.output.debug(&format!("{} -> {:?}", args.path, route));

    match route {
        Route::Home => catalog_cmd::show_listing(ctx, CategoryFilter::All),
        Route::Product(id) => match catalog::product(&id) {
            Some(product) => catalog_cmd::show_product(ctx, product),
            None => not_found(ctx, &args.path),
        },
        Route::Cart => cart::show_cart(ctx, &Cart::load(&ctx.cache()?)?),
        Route::Checkout => {
            let cart = Cart::load(&ctx.cache()?)?;
            let flow = checkout::checkout_flow(ctx);
            if flow.needs_redirect(&cart) {
                ctx.output.info(&format!("Your bag is empty, showing {}", Route::Cart));
                cart::show_cart(ctx, &cart);
            } else {
                checkout::show_summary(ctx, &flow, &cart);
                ctx.output.info("Place the order with `atelier checkout`");
            }
        }
        Route::Feedback => review::show_board(ctx, &ReviewBoard::load(&ctx.cache()?)?),
        Route::Auth => {
            let cache = ctx.cache()?;
            auth::show_user(ctx, &AuthService::new(&cache).current_user()?);
        }
        Route::NotFound(path) => not_found(ctx, &path),
    }

    Ok(())
}

fn not_found(ctx: &Context, path: &str) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "not_found": path }));
        return;
    }
    ctx.output.header("404");
    ctx.output.warn(&format!("Page not found: {}", path));
    ctx.output.info(&format!("Return to the shop: {}", Route::Home));
}
