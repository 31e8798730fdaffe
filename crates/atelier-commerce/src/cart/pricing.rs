//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Flat-rate shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_threshold: Money,
    /// Charge for everything else.
    pub flat_rate: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: Money::usd(100),
            flat_rate: Money::usd(12),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::zero(subtotal.currency)
        } else {
            self.flat_rate
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Subtotal + shipping.
    pub grand_total: Money,
    /// How much more to spend for free shipping, when shipping is charged.
    pub free_shipping_remaining: Option<Money>,
}

impl CartPricing {
    /// Price a subtotal under a shipping policy.
    pub fn calculate(subtotal: Money, policy: &ShippingPolicy) -> Self {
        let shipping = policy.shipping_for(subtotal);
        let free_shipping_remaining = if shipping.is_zero() {
            None
        } else {
            policy.free_threshold.try_subtract(&subtotal)
        };

        Self {
            subtotal,
            shipping,
            grand_total: subtotal.saturating_add(&shipping),
            free_shipping_remaining,
        }
    }

    /// Check if shipping is free.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping label as shown in the order summary.
    pub fn shipping_label(&self) -> String {
        if self.ships_free() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}
