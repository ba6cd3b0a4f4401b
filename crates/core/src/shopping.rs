//! Aggregated shopping list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// Distinct ingredient lines across a set of meals, sorted.
///
/// Lines are de-duplicated by exact text, so "2 cups flour" and
/// "1 cup flour" are both kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<String>,
}

impl ShoppingList {
    pub fn from_meals<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> Self {
        let lines: BTreeSet<String> = meals
            .into_iter()
            .flat_map(|meal| meal.ingredients.ingredients())
            .map(|ingredient| ingredient.display_line())
            .collect();

        Self {
            items: lines.into_iter().collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// e.g. "12 ingredients needed".
    pub fn summary(&self) -> String {
        format!("{} ingredients needed", self.items.len())
    }
}
