//! Product type.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (site-relative path).
    pub image: String,
    /// Product category.
    pub category: Category,
    /// Catalog copy.
    pub description: String,
}

impl Product {
    /// Create a product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category,
            description: description.into(),
        }
    }

    /// Route path of the product detail view.
    pub fn path(&self) -> String {
        format!("/product/{}", self.id)
    }
}
