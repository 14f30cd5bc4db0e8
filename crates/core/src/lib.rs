//! Pure domain logic for the environmental monitor.
//!
//! No I/O lives here: the evaluator and tip resolver are functions of their
//! explicit inputs plus two process-wide constant tables (the default
//! threshold set and the health tip catalog). Persistence and data
//! acquisition are handled by the `envmon-db` and `envmon-providers` crates.

pub mod alert;
pub mod error;
pub mod evaluate;
pub mod metric;
pub mod reading;
pub mod threshold;
pub mod tips;
pub mod types;
