//! Testimonial Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Testimonial Id
pub type TestimonialId = TypedId<TestimonialRecord>;

/// Testimonial Record
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialRecord {
    pub id: TestimonialId,
    pub name: String,
    pub rating: i32,
    pub review: String,
    pub initials: String,
    pub review_image: Option<String>,
    pub approved: bool,
    pub created_at: Timestamp,
}
