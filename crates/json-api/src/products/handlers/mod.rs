//! Product Handlers

pub(crate) mod create;
pub(crate) mod image;
pub(crate) mod index;
