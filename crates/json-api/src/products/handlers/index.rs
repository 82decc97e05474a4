//! Product Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use thunder_app::domain::products::records::ProductRecord;

use crate::extensions::*;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Sequential product id
    pub id: i64,

    /// Display name
    pub name: String,

    /// Category key (`relojes`, `zapatillas` or `ropa`)
    pub category: String,

    /// Image URL
    pub image: Option<String>,

    /// Display price
    pub price: Option<String>,

    /// Whether the product is highlighted on the landing page
    pub featured: bool,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            name: product.name,
            category: product.category,
            image: product.image,
            price: product.price,
            featured: product.featured,
        }
    }
}

/// Product Index Handler
///
/// Returns every product, featured first, then by category and id.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Product list"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error fetching products"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .products
        .list_products()
        .await
        .or_500("Error fetching products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
