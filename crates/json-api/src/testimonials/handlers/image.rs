//! Update Testimonial Image Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::images::ImageUpdatedResponse;

/// Update Testimonial Image Handler
///
/// Acknowledges the new image URL without storing it.
#[endpoint(
    tags("testimonials"),
    summary = "Update Testimonial Image",
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
        "Testimonial",
        id.into_inner(),
        image_url.into_inner(),
    ))
}
