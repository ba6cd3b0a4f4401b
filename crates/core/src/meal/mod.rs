//! Meal records and their decoding from TheMealDB payloads.

mod types;
pub mod wire;

pub use types::*;
pub use wire::{DecodeError, MealDbRecord, MealDbResponse};

use thiserror::Error;

/// Errors addressing ingredient slots.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("ingredient slot {0} is out of range (1..=20)")]
    OutOfRange(usize),

    #[error("ingredient slot {0} appears more than once")]
    Duplicate(usize),
}
