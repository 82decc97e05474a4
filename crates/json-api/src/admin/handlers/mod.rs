//! Admin Handlers

pub(crate) mod conversion_stats;
pub(crate) mod reseed;
pub(crate) mod summary;
