//! Testimonials Data

/// New Testimonial Data
///
/// `rating` is expected to fall within 1 to 5 but is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    pub rating: i32,
    pub review: String,
    pub initials: String,
    pub review_image: Option<String>,
    pub approved: bool,
}

impl NewTestimonial {
    /// An approved testimonial with no review text or image.
    #[must_use]
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
            review: String::new(),
            initials: String::new(),
            review_image: None,
            approved: true,
        }
    }
}
