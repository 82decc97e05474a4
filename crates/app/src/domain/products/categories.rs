//! Catalog category tags.
//!
//! Categories are stored as free text; these are the tags the landing page
//! knows how to render.

/// Watches. Featured items are drawn from this category.
pub const WATCHES: &str = "relojes";

/// Sneakers.
pub const SNEAKERS: &str = "zapatillas";

/// Clothing.
pub const CLOTHING: &str = "ropa";

/// Every category the landing page renders.
pub const ALL: [&str; 3] = [WATCHES, SNEAKERS, CLOTHING];
