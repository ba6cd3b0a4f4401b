//! Meal plan types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::days::{Day, DaySelection};
use crate::acquirer::Compliance;
use crate::filter::ExclusionSet;
use crate::instructions::CookingInstruction;
use crate::meal::Meal;
use crate::mealdb::MealSourceError;
use crate::shopping::ShoppingList;

/// Errors from plan generation.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no days selected")]
    NoDaysSelected,

    #[error("meal acquisition failed: {0}")]
    Fetch(#[from] MealSourceError),
}

/// Input to plan generation.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Display name of the person the plan is for.
    pub owner: Option<String>,
    pub days: DaySelection,
    pub exclusions: ExclusionSet,
}

/// One day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedMeal {
    pub day: Day,
    pub meal: Meal,
    pub compliance: Compliance,
}

/// A generated meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub exclusions: ExclusionSet,
    pub entries: Vec<PlannedMeal>,
}

impl MealPlan {
    /// "Alex's Meal Plan", or "Your Meal Plan" without an owner.
    pub fn title(&self) -> String {
        match self.owner.as_deref().map(str::trim) {
            Some(owner) if !owner.is_empty() => format!("{}'s Meal Plan", owner),
            _ => "Your Meal Plan".to_string(),
        }
    }

    /// Confirmation shown when restrictions were applied.
    pub fn restrictions_notice(&self) -> Option<String> {
        if self.exclusions.is_empty() {
            None
        } else {
            Some(format!(
                "Your meal plan has been created with {} dietary restriction(s) applied.",
                self.exclusions.len()
            ))
        }
    }

    /// Entries that were returned unevaluated after the attempt budget ran out.
    pub fn best_effort_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.compliance == Compliance::BestEffort)
            .count()
    }

    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.entries.iter().map(|e| &e.meal)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shopping_list(&self) -> ShoppingList {
        ShoppingList::from_meals(self.meals())
    }

    pub fn instructions(&self) -> Vec<CookingInstruction> {
        self.entries.iter().map(CookingInstruction::from).collect()
    }
}
