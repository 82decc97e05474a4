//! Product Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}
