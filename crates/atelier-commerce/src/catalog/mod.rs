//! Catalog module.
//!
//! The storefront sells from a fixed catalog compiled into the binary.

mod category;
mod data;
mod product;

pub use category::{Category, CategoryFilter};
pub use data::{categories, filter, product, products, related, RELATED_LIMIT};
pub use product::Product;
