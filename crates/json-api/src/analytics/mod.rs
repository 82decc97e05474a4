//! Click Analytics

mod handlers;

pub(crate) use handlers::*;
