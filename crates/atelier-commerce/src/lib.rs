//! Storefront domain logic for Atelier.
//!
//! - **Catalog**: the fixed product list, categories, related products
//! - **Cart**: quantities per product, pricing and shipping
//! - **Checkout**: form validation and the simulated payment flow
//! - **Review**: the locally stored review board
//!
//! State that must outlive a process goes through [`atelier_cache::Cache`].
//!
//! # Example
//!
//! ```rust
//! use atelier_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let sweater = catalog::product(&ProductId::new("1")).unwrap();
//! cart.add_item(sweater);
//! cart.add_item(sweater);
//!
//! let pricing = cart.pricing(&ShippingPolicy::default());
//! assert_eq!(pricing.grand_total.display(), "$256.00");
//! assert!(pricing.ships_free());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod validation;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod review;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use validation::{FieldError, FieldErrors};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::validation::{FieldError, FieldErrors};

    // Catalog
    pub use crate::catalog::{self, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, ShippingPolicy};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutForm, CheckoutState, Confirmation, PaymentMethod, Wallet,
    };

    // Reviews
    pub use crate::review::{Review, ReviewBoard, ReviewForm, ReviewSummary};
}
