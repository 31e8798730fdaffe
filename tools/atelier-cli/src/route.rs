//! Storefront routes.

use std::fmt;

use atelier_commerce::ProductId;

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - product listing.
    Home,
    /// `/product/:id`
    Product(ProductId),
    /// `/cart`
    Cart,
    /// `/checkout`
    Checkout,
    /// `/feedback` - review board.
    Feedback,
    /// `/auth`
    Auth,
    /// Anything else; keeps the path that was asked for.
    NotFound(String),
}

impl Route {
    /// Match a path. Trailing slashes and a query string are ignored.
    pub fn parse(path: &str) -> Self {
        let without_query = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = without_query.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')
            .unwrap_or(trimmed)
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if !without_query.starts_with('/') {
            return Route::NotFound(path.to_string());
        }

        match segments.as_slice() {
            [] => Route::Home,
            ["product", id] => Route::Product(ProductId::new(*id)),
            ["cart"] => Route::Cart,
            ["checkout"] => Route::Checkout,
            ["feedback"] => Route::Feedback,
            ["auth"] => Route::Auth,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Render back to a path.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Product(id) => format!("/product/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::Feedback => "/feedback".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/product/3"), Route::Product(ProductId::new("3")));
        assert_eq!(Route::parse("/cart"), Route::Cart);
        assert_eq!(Route::parse("/checkout"), Route::Checkout);
        assert_eq!(Route::parse("/feedback"), Route::Feedback);
        assert_eq!(Route::parse("/auth"), Route::Auth);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::parse("/cart/"), Route::Cart);
        assert_eq!(Route::parse("/product/7/"), Route::Product(ProductId::new("7")));
        assert_eq!(Route::parse("/feedback?sort=new"), Route::Feedback);
        assert_eq!(Route::parse("//"), Route::Home);
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(Route::parse("/product"), Route::NotFound("/product".into()));
        assert_eq!(
            Route::parse("/product/1/reviews"),
            Route::NotFound("/product/1/reviews".into())
        );
        assert_eq!(Route::parse("cart"), Route::NotFound("cart".into()));
        assert_eq!(Route::parse("/admin"), Route::NotFound("/admin".into()));
    }

    #[test]
    fn test_routes_render_back() {
        for path in ["/", "/product/5", "/cart", "/checkout", "/feedback", "/auth"] {
            let route = Route::parse(path);
            assert_eq!(route.path(), path);
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::Product(ProductId::new("2")).to_string(), "/product/2");
    }
}
