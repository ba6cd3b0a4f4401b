//! Dietary exclusions and the meal compliance check.
//!
//! An [`ExclusionSet`] holds lowercase text fragments. A meal is compliant
//! when no fragment occurs, as a substring, in its title, its category or
//! any populated ingredient name.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// Restrictions offered as one-tap chips by front ends.
pub const COMMON_RESTRICTIONS: [&str; 8] = [
    "beef", "pork", "chicken", "fish", "dairy", "nuts", "eggs", "shellfish",
];

/// Set of lowercase fragments a meal must not contain.
///
/// Input is trimmed and lowercased; blank input is ignored and duplicates
/// collapse. Iteration order is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    fragments: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment. Returns `true` if it was not already present.
    pub fn add(&mut self, raw: &str) -> bool {
        match normalize(raw) {
            Some(fragment) => self.fragments.insert(fragment),
            None => false,
        }
    }

    /// Remove a fragment. Returns `true` if it was present.
    pub fn remove(&mut self, raw: &str) -> bool {
        match normalize(raw) {
            Some(fragment) => self.fragments.remove(&fragment),
            None => false,
        }
    }

    /// Flip a fragment on or off. Returns `true` if it is now present.
    pub fn toggle(&mut self, raw: &str) -> bool {
        if self.contains(raw) {
            self.remove(raw);
            false
        } else {
            self.add(raw)
        }
    }

    pub fn contains(&self, raw: &str) -> bool {
        normalize(raw).is_some_and(|fragment| self.fragments.contains(&fragment))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The first fragment found in the meal, if any.
    pub fn first_match(&self, meal: &Meal) -> Option<&str> {
        let title = meal.title.to_lowercase();
        let category = meal.category.to_lowercase();
        let ingredients: Vec<String> = meal
            .ingredients
            .ingredients()
            .map(|i| i.name.to_lowercase())
            .collect();

        self.iter().find(|fragment| {
            title.contains(fragment)
                || category.contains(fragment)
                || ingredients.iter().any(|name| name.contains(fragment))
        })
    }

    /// Whether the meal contains none of the fragments.
    pub fn permits(&self, meal: &Meal) -> bool {
        self.first_match(meal).is_none()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for raw in iter {
            set.add(raw.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(fragments: Vec<String>) -> Self {
        fragments.into_iter().collect()
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.fragments.into_iter().collect()
    }
}
