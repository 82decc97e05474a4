//! Create Testimonial Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use thunder_app::domain::testimonials::data::NewTestimonial;

use crate::{extensions::*, testimonials::index::TestimonialResponse};

/// Create Testimonial Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateTestimonialRequest {
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default)]
    pub review_image: Option<String>,
    #[serde(default = "approved_by_default")]
    pub approved: bool,
}

fn approved_by_default() -> bool {
    true
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(request: CreateTestimonialRequest) -> Self {
        NewTestimonial {
            review: request.review.unwrap_or_default(),
            initials: request.initials.unwrap_or_default(),
            review_image: request.review_image,
            approved: request.approved,
            ..NewTestimonial::new(request.name, request.rating)
        }
    }
}

/// Create Testimonial Handler
#[endpoint(
    tags("testimonials"),
    summary = "Create Testimonial",
    responses(
        (status_code = StatusCode::OK, description = "Testimonial created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error creating testimonial"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTestimonialRequest>,
    depot: &mut Depot,
) -> Result<Json<TestimonialResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let testimonial = state
        .testimonials
        .create_testimonial(json.into_inner().into())
        .await
        .or_500("Error creating testimonial")?;

    Ok(Json(testimonial.into()))
}
