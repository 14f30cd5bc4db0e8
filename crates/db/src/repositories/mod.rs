//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&DbPool` as the first argument.

pub mod reading_repo;
pub mod threshold_repo;
