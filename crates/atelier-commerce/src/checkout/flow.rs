//! Checkout flow state machine.
//!
//! The flow validates the form, waits a fixed processing delay standing in
//! for a payment round trip, then always succeeds and empties the cart.
//! There is no payment protocol, retry, or partial failure.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartPricing, ShippingPolicy};
use crate::checkout::{CheckoutForm, PaymentMethod};
use crate::ids::OrderId;
use crate::money::Money;
use crate::validation::FieldErrors;
use crate::CommerceError;

/// Simulated payment processing time.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Where the checkout currently is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// Collecting details; validation errors may be showing.
    Editing,
    /// Waiting on the simulated payment.
    Processing,
    /// Payment accepted.
    Confirmed(Confirmation),
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Editing => "editing",
            CheckoutState::Processing => "processing",
            CheckoutState::Confirmed(_) => "confirmed",
        }
    }
}

/// Receipt shown after a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Order number.
    pub order_id: OrderId,
    /// Where the confirmation "was sent".
    pub email: String,
    /// Customer name.
    pub name: String,
    /// Units purchased.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charged.
    pub shipping: Money,
    /// Amount charged.
    pub total: Money,
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Checkout flow state.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    state: CheckoutState,
    errors: FieldErrors,
    shipping: ShippingPolicy,
    processing_delay: Duration,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    /// Create a new checkout flow with the default policy and delay.
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Editing,
            errors: FieldErrors::new(),
            shipping: ShippingPolicy::default(),
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Use a different shipping policy.
    pub fn with_shipping(mut self, policy: ShippingPolicy) -> Self {
        self.shipping = policy;
        self
    }

    /// Use a different processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Field errors from the last rejected submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// The receipt, once confirmed.
    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.state {
            CheckoutState::Confirmed(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    /// Check if checkout is complete.
    pub fn is_confirmed(&self) -> bool {
        self.confirmation().is_some()
    }

    /// An empty cart sends the customer back to the cart, unless the order
    /// was just placed (which is what emptied it).
    pub fn needs_redirect(&self, cart: &Cart) -> bool {
        cart.is_empty() && !self.is_confirmed()
    }

    /// Order summary for the cart being checked out.
    pub fn summary(&self, cart: &Cart) -> CartPricing {
        cart.pricing(&self.shipping)
    }

    /// Drop the error shown for a field the customer just edited.
    pub fn field_edited(&mut self, field: &str) {
        self.errors.clear_field(field);
    }

    /// Submit the form.
    ///
    /// On success the cart is cleared and the flow moves to `Confirmed`.
    /// Validation failures keep the flow in `Editing` with field errors set.
    pub async fn submit(
        &mut self,
        form: &CheckoutForm,
        cart: &mut Cart,
    ) -> Result<Confirmation, CommerceError> {
        if self.is_confirmed() {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.state.as_str().to_string(),
                to: CheckoutState::Processing.as_str().to_string(),
            });
        }

        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        if let Err(errors) = form.validate() {
            tracing::info!(fields = errors.len(), "checkout form rejected");
            self.errors = errors.clone();
            self.state = CheckoutState::Editing;
            return Err(CommerceError::Validation(errors));
        }

        self.errors = FieldErrors::new();
        self.state = CheckoutState::Processing;
        tracing::debug!(delay_ms = self.processing_delay.as_millis() as u64, "processing payment");
        tokio::time::sleep(self.processing_delay).await;

        let pricing = self.summary(cart);
        let confirmation = Confirmation {
            order_id: OrderId::generate(),
            email: form.email.trim().to_string(),
            name: form.full_name(),
            item_count: cart.item_count(),
            subtotal: pricing.subtotal,
            shipping: pricing.shipping,
            total: pricing.grand_total,
            payment_method: form.payment_method,
            placed_at: Utc::now(),
        };

        cart.clear();
        self.state = CheckoutState::Confirmed(confirmation.clone());
        tracing::info!(
            order = %confirmation.order_id,
            total = %confirmation.total,
            method = %confirmation.payment_method,
            "payment successful"
        );

        Ok(confirmation)
    }

    /// Start over after a confirmed order.
    pub fn reset(&mut self) {
        self.state = CheckoutState::Editing;
        self.errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::ids::ProductId;

    fn cart_with(ids: &[&str]) -> Cart {
        let mut cart = Cart::new();
        for id in ids {
            cart.add_item(catalog::product(&ProductId::new(*id)).unwrap());
        }
        cart
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            email: "grace@example.com".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            address: "1 Harbor Way".into(),
            city: "Arlington".into(),
            zip: "22201".into(),
            payment_method: PaymentMethod::Upi,
            upi_id: "grace@upi".into(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert!(flow.errors().is_empty());
        assert_eq!(flow.processing_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_redirect_on_empty_cart() {
        let flow = CheckoutFlow::new();
        assert!(flow.needs_redirect(&Cart::new()));
        assert!(!flow.needs_redirect(&cart_with(&["1"])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_then_confirms() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with(&["4"]); // $45

        let started = tokio::time::Instant::now();
        let confirmation = flow.submit(&valid_form(), &mut cart).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_PROCESSING_DELAY);
        assert!(cart.is_empty());
        assert!(flow.is_confirmed());
        assert!(!flow.needs_redirect(&cart));
        assert_eq!(confirmation.email, "grace@example.com");
        assert_eq!(confirmation.shipping, Money::usd(12));
        assert_eq!(confirmation.total, Money::usd(57));
        assert_eq!(confirmation.item_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_free_shipping_over_threshold() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with(&["1"]); // $128

        let confirmation = flow.submit(&valid_form(), &mut cart).await.unwrap();
        assert!(confirmation.shipping.is_zero());
        assert_eq!(confirmation.total, Money::usd(128));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_keeps_cart() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with(&["1", "2"]);
        let mut form = valid_form();
        form.email.clear();

        let err = flow.submit(&form, &mut cart).await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get("email")),
            Some("Email is required")
        );
        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert_eq!(flow.errors().get("email"), Some("Email is required"));
        assert_eq!(cart.unique_item_count(), 2);

        flow.field_edited("email");
        assert!(flow.errors().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_cart_is_rejected() {
        let mut flow = CheckoutFlow::new();
        let mut cart = Cart::new();
        let err = flow.submit(&valid_form(), &mut cart).await.unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cannot_submit_twice() {
        let mut flow = CheckoutFlow::new().with_processing_delay(Duration::ZERO);
        let mut cart = cart_with(&["3"]);
        flow.submit(&valid_form(), &mut cart).await.unwrap();

        let mut cart = cart_with(&["3"]);
        let err = flow.submit(&valid_form(), &mut cart).await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCheckoutTransition { .. }));

        flow.reset();
        assert!(flow.submit(&valid_form(), &mut cart).await.is_ok());
    }
}
