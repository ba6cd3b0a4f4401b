//! Weekly meal plans.

mod days;
mod planner;
mod types;

pub use days::{Day, DaySelection, ParseDayError};
pub use planner::MealPlanner;
pub use types::{MealPlan, PlanError, PlanRequest, PlannedMeal};
