//! Per-day cooking instructions.

use serde::{Deserialize, Serialize};

use crate::plan::{Day, PlannedMeal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingInstruction {
    pub day: Day,
    pub title: String,
    pub instructions: String,
}

impl From<&PlannedMeal> for CookingInstruction {
    fn from(entry: &PlannedMeal) -> Self {
        Self {
            day: entry.day,
            title: entry.meal.title.clone(),
            instructions: entry.meal.instructions.clone(),
        }
    }
}
