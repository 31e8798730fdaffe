//! Checkout command.

use anyhow::Result;
use atelier_commerce::cart::Cart;
use atelier_commerce::checkout::{format_card_number, CheckoutFlow, CheckoutForm, Confirmation};
use atelier_commerce::CommerceError;

use super::{reject_form, CheckoutArgs};
use crate::context::Context;
use crate::output::price;
use crate::route::Route;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let mut cart = Cart::load(&cache)?;
    let mut flow = checkout_flow(ctx);

    if flow.needs_redirect(&cart) {
        ctx.output.warn("Your bag is empty");
        ctx.output.info(&format!("Redirecting to {}", Route::Cart));
        return Err(CommerceError::EmptyCart.into());
    }

    show_summary(ctx, &flow, &cart);

    let form = CheckoutForm {
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
        address: args.address,
        city: args.city,
        zip: args.zip,
        payment_method: args.method,
        card_number: format_card_number(&args.card_number),
        expiry: args.expiry,
        cvv: args.cvv,
        upi_id: args.upi_id,
        wallet: args.wallet,
    };

    let spinner = ctx.output.spinner("Processing payment...");
    let result = flow.submit(&form, &mut cart).await;
    spinner.finish_and_clear();

    let confirmation = match result {
        Ok(confirmation) => confirmation,
        Err(CommerceError::Validation(errors)) => return Err(reject_form(ctx, &errors)),
        Err(e) => return Err(e.into()),
    };

    cart.save(&cache)?;
    show_confirmation(ctx, &confirmation);
    Ok(())
}

/// Checkout flow configured from `[checkout]`.
pub fn checkout_flow(ctx: &Context) -> CheckoutFlow {
    CheckoutFlow::new()
        .with_processing_delay(ctx.config.checkout.processing_delay())
        .with_shipping(ctx.config.checkout.shipping_policy())
}

/// The order summary shown beside the checkout form.
pub fn show_summary(ctx: &Context, flow: &CheckoutFlow, cart: &Cart) {
    let pricing = flow.summary(cart);

    if ctx.output.is_json() {
        return;
    }

    ctx.output.header("Order Summary");
    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} × {}  {}",
            item.quantity,
            item.product.name,
            item.line_total().display()
        ));
    }
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Shipping", &pricing.shipping_label());
    ctx.output.kv("Total", &price(&pricing.grand_total.display()));
}

fn show_confirmation(ctx: &Context, confirmation: &Confirmation) {
    if ctx.output.is_json() {
        ctx.output.json(confirmation);
        return;
    }

    ctx.output.success("Payment successful!");
    ctx.output.header("Order Confirmed");
    ctx.output.kv("Order number", confirmation.order_id.as_str());
    ctx.output.kv("Paid", &price(&confirmation.total.display()));
    ctx.output.kv("Method", confirmation.payment_method.display_name());
    ctx.output.line(&format!(
        "\n  Thank you, {}. A confirmation email has been sent to {}.",
        confirmation.name, confirmation.email
    ));
}
