//! Update Product Image Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::images::ImageUpdatedResponse;

/// Update Product Image Handler
///
/// Acknowledges the new image URL without storing it.
#[endpoint(
    tags("products"),
    summary = "Update Product Image",
    responses(
        (status_code = StatusCode::OK, description = "Image update acknowledged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    image_url: QueryParam<String, true>,
) -> Json<ImageUpdatedResponse> {
    Json(ImageUpdatedResponse::acknowledge(
        "Product",
        id.into_inner(),
        image_url.into_inner(),
    ))
}
