//! Admin

mod handlers;

pub(crate) use handlers::*;
