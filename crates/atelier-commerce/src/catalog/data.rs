//! The static product catalog and queries over it.

use std::sync::OnceLock;

use crate::catalog::{Category, CategoryFilter, Product};
use crate::ids::ProductId;
use crate::money::Money;

/// Default number of related products shown on a detail view.
pub const RELATED_LIMIT: usize = 4;

/// All products, in catalog order.
pub fn products() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up a product by ID.
pub fn product(id: &ProductId) -> Option<&'static Product> {
    products().iter().find(|p| &p.id == id)
}

/// Categories shown in the listing filter, `All` first.
pub fn categories() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

/// Products passing a category filter, in catalog order.
pub fn filter(filter: CategoryFilter) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

/// Other products in the same category, at most `limit`.
pub fn related(product: &Product, limit: usize) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}

fn build_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Merino Wool Sweater",
            Money::usd(128),
            "/products/sweater.jpg",
            Category::Tops,
            "Luxuriously soft merino wool sweater with a relaxed fit. Perfect for layering or wearing on its own during cooler months.",
        ),
        Product::new(
            "2",
            "Linen Blend Trousers",
            Money::usd(98),
            "/products/trousers.jpg",
            Category::Bottoms,
            "Breathable linen-blend trousers with a tailored silhouette. Features a comfortable elastic waistband and side pockets.",
        ),
        Product::new(
            "3",
            "Cashmere Scarf",
            Money::usd(185),
            "/products/scarf.jpg",
            Category::Accessories,
            "Ultra-soft cashmere scarf in a timeless design. Generously sized for multiple styling options.",
        ),
        Product::new(
            "4",
            "Organic Cotton Tee",
            Money::usd(45),
            "/products/tee.jpg",
            Category::Tops,
            "Essential organic cotton t-shirt with a classic crew neck. Sustainably made with premium materials.",
        ),
        Product::new(
            "5",
            "Leather Weekender Bag",
            Money::usd(295),
            "/products/bag.jpg",
            Category::Accessories,
            "Handcrafted full-grain leather weekender bag. Spacious interior with multiple compartments for organized travel.",
        ),
        Product::new(
            "6",
            "Silk Blend Blouse",
            Money::usd(145),
            "/products/blouse.jpg",
            Category::Tops,
            "Elegant silk-blend blouse with a relaxed fit. Features mother-of-pearl buttons and a subtle sheen.",
        ),
        Product::new(
            "7",
            "Wool Coat",
            Money::usd(425),
            "/products/coat.jpg",
            Category::Outerwear,
            "Timeless wool coat with a refined silhouette. Fully lined with premium Italian fabric.",
        ),
        Product::new(
            "8",
            "Canvas Sneakers",
            Money::usd(89),
            "/products/sneakers.jpg",
            Category::Footwear,
            "Minimalist canvas sneakers with a vulcanized rubber sole. Comfortable and versatile for everyday wear.",
        ),
    ]
}
