//! Create Product Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use thunder_app::domain::products::data::NewProduct;

use crate::{extensions::*, products::index::ProductResponse};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            category: request.category,
            image: request.image,
            price: request.price,
            featured: request.featured,
        }
    }
}

/// Create Product Handler
///
/// The id is assigned by the server as the next sequential number.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::OK, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error creating product"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .products
        .create_product(json.into_inner().into())
        .await
        .or_500("Error creating product")?;

    Ok(Json(product.into()))
}
