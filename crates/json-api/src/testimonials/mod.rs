//! Testimonials

mod handlers;

pub(crate) use handlers::*;
