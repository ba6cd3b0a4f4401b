//! Constraint-aware meal acquisition.

mod engine;
mod types;

pub use engine::MealAcquirer;
pub use types::{Acquisition, Compliance, MAX_COMPLIANCE_ATTEMPTS};
