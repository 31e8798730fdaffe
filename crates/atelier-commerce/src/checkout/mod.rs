//! Checkout module.
//!
//! Contains the checkout form, payment options, and the simulated
//! payment flow.

mod flow;
mod form;
mod payment;

pub use flow::{CheckoutFlow, CheckoutState, Confirmation, DEFAULT_PROCESSING_DELAY};
pub use form::CheckoutForm;
pub use payment::{format_card_number, PaymentMethod, Wallet};
