//! Click Analytics Handlers

pub(crate) mod click;
pub(crate) mod count;
