//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub featured: bool,
}
