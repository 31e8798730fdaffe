//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem, CART_KEY};
pub use pricing::{CartPricing, ShippingPolicy};
