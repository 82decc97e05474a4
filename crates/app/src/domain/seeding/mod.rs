//! Seeding

pub mod errors;
pub mod fixtures;
pub mod service;

pub use errors::SeedingServiceError;
pub use service::*;
