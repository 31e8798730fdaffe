//! Commerce error types.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these cover form submission and persistence.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown payment method or wallet.
    #[error("Unknown payment option: {0}")]
    UnknownPaymentOption(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Local storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] atelier_cache::CacheError),
}

impl CommerceError {
    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CommerceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for CommerceError {
    fn from(errors: FieldErrors) -> Self {
        CommerceError::Validation(errors)
    }
}
