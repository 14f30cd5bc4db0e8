//! Entity models and DTOs for the persistence layer.

pub mod reading;
pub mod threshold;
