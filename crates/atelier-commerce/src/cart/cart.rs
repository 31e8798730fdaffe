//! Cart and cart item types.

use atelier_cache::Cache;
use serde::{Deserialize, Serialize};

use crate::cart::{CartPricing, ShippingPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Storage key for the persisted cart.
pub const CART_KEY: &str = "cart";

/// A shopping cart.
///
/// Items keep insertion order. Every item has a quantity of at least one;
/// an item whose quantity drops to zero is removed. Totals are derived from
/// the items on every call and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<CartItem>,
    /// Cart currency.
    #[serde(default)]
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the cart from storage, or start empty.
    pub fn load(cache: &Cache) -> Result<Self, CommerceError> {
        let mut cart: Cart = cache.get_or_default(CART_KEY)?;
        // A hand-edited store could hold zero quantities.
        cart.items.retain(|i| i.quantity > 0);
        tracing::debug!(items = cart.items.len(), "restored cart");
        Ok(cart)
    }

    /// Persist the cart.
    pub fn save(&self, cache: &Cache) -> Result<(), CommerceError> {
        cache.set(CART_KEY, self)?;
        Ok(())
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity when the product is already in the cart,
    /// otherwise appends it with quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        self.add_items(product, 1);
    }

    /// Add `count` units of a product in one step.
    ///
    /// A count below one adds a single unit. Quantities saturate at `u32::MAX`.
    pub fn add_items(&mut self, product: &Product, count: u32) {
        let count = count.max(1);
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(count);
            tracing::debug!(product = %product.id, quantity = existing.quantity, "incremented cart item");
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: count,
        });
        tracing::debug!(product = %product.id, quantity = count, "added cart item");
    }

    /// Remove an item. Unknown IDs are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        if self.items.len() < len_before {
            tracing::debug!(product = %product_id, "removed cart item");
        }
    }

    /// Set an item's quantity.
    ///
    /// A quantity of zero or less removes the item. Unknown IDs are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            tracing::debug!(product = %product_id, quantity = item.quantity, "updated cart item");
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cleared cart");
    }

    /// Total item count (sum of quantities), as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get_item(product_id).is_some()
    }

    /// Sum of price x quantity over all items.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Money::zero(self.currency), |acc, m| acc.saturating_add(&m))
    }

    /// Price x quantity for one item.
    pub fn line_total(&self, product_id: &ProductId) -> Option<Money> {
        self.get_item(product_id).map(CartItem::line_total)
    }

    /// Subtotal, shipping and grand total under a shipping policy.
    pub fn pricing(&self, policy: &ShippingPolicy) -> CartPricing {
        CartPricing::calculate(self.subtotal(), policy)
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, denormalized for display.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price x quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}
