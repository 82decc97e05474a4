//! Thunder Services Domain Concerns

pub mod analytics;
pub mod products;
pub mod reports;
pub mod seeding;
pub mod testimonials;
