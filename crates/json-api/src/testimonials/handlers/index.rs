//! Testimonial Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use thunder_app::domain::testimonials::records::TestimonialRecord;

use crate::extensions::*;

/// Testimonial Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestimonialResponse {
    /// Sequential testimonial id
    pub id: i64,

    /// Customer name
    pub name: String,

    /// Star rating
    pub rating: i32,

    /// Review text
    pub review: String,

    /// Customer initials shown in the avatar
    pub initials: String,

    /// Screenshot of the review
    pub review_image: Option<String>,
}

impl From<TestimonialRecord> for TestimonialResponse {
    fn from(testimonial: TestimonialRecord) -> Self {
        Self {
            id: testimonial.id.into_i64(),
            name: testimonial.name,
            rating: testimonial.rating,
            review: testimonial.review,
            initials: testimonial.initials,
            review_image: testimonial.review_image,
        }
    }
}

/// Testimonial Index Handler
///
/// Returns approved testimonials in id order.
#[endpoint(
    tags("testimonials"),
    summary = "List Testimonials",
    responses(
        (status_code = StatusCode::OK, description = "Approved testimonials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error fetching testimonials"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<TestimonialResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let testimonials = state
        .testimonials
        .list_testimonials()
        .await
        .or_500("Error fetching testimonials")?;

    Ok(Json(testimonials.into_iter().map(Into::into).collect()))
}
