//! Meal record types.

use serde::{Deserialize, Serialize};

use super::SlotError;

/// Number of ingredient slots carried by every meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A single ingredient occupying one slot of a meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name (trimmed, never blank).
    pub name: String,
    /// Quantity/measure (trimmed, `None` when blank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl Ingredient {
    /// Create an ingredient, normalizing blank measures to `None`.
    pub fn new(name: impl Into<String>, measure: Option<&str>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            measure: measure
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        }
    }

    /// Display line used by shopping lists and printed plans ("2 cups flour").
    pub fn display_line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

/// Serialized form of one populated slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientEntry {
    /// Slot number (1-based).
    pub slot: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

/// Fixed-width sparse table of ingredient slots.
///
/// Unused slots are `None`. Slots are addressed numerically, 1 through
/// [`INGREDIENT_SLOTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<IngredientEntry>", try_from = "Vec<IngredientEntry>")]
pub struct IngredientSlots {
    slots: [Option<Ingredient>; INGREDIENT_SLOTS],
}

impl IngredientSlots {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by filling slots 1.. in order.
    pub fn from_ingredients(
        ingredients: impl IntoIterator<Item = Ingredient>,
    ) -> Result<Self, SlotError> {
        let mut slots = Self::new();
        for (index, ingredient) in ingredients.into_iter().enumerate() {
            slots.set(index + 1, ingredient)?;
        }
        Ok(slots)
    }

    /// Put an ingredient in a slot. Blank names leave the slot empty.
    pub fn set(&mut self, slot: usize, ingredient: Ingredient) -> Result<(), SlotError> {
        let index = Self::index(slot)?;
        self.slots[index] = if ingredient.name.trim().is_empty() {
            None
        } else {
            Some(ingredient)
        };
        Ok(())
    }

    /// Ingredient in a slot, if populated.
    pub fn get(&self, slot: usize) -> Option<&Ingredient> {
        Self::index(slot)
            .ok()
            .and_then(|index| self.slots[index].as_ref())
    }

    /// Iterate populated slots in slot order as `(slot, ingredient)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Ingredient)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|i| (index + 1, i)))
    }

    /// Iterate populated ingredients in slot order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.slots.iter().flatten()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.ingredients().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(slot: usize) -> Result<usize, SlotError> {
        if (1..=INGREDIENT_SLOTS).contains(&slot) {
            Ok(slot - 1)
        } else {
            Err(SlotError::OutOfRange(slot))
        }
    }
}

impl From<IngredientSlots> for Vec<IngredientEntry> {
    fn from(slots: IngredientSlots) -> Self {
        slots
            .iter()
            .map(|(slot, ingredient)| IngredientEntry {
                slot,
                name: ingredient.name.clone(),
                measure: ingredient.measure.clone(),
            })
            .collect()
    }
}

impl TryFrom<Vec<IngredientEntry>> for IngredientSlots {
    type Error = SlotError;

    fn try_from(entries: Vec<IngredientEntry>) -> Result<Self, Self::Error> {
        let mut slots = Self::new();
        for entry in entries {
            if slots.get(entry.slot).is_some() {
                return Err(SlotError::Duplicate(entry.slot));
            }
            slots.set(
                entry.slot,
                Ingredient::new(entry.name, entry.measure.as_deref()),
            )?;
        }
        Ok(slots)
    }
}

/// One recipe as returned by the remote source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Remote record identifier.
    pub id: String,
    pub title: String,
    /// Classification, e.g. "Seafood".
    pub category: String,
    /// Region, e.g. "Italian".
    pub area: String,
    /// Preparation steps as a single block of text.
    pub instructions: String,
    /// Image URI.
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// External video reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default)]
    pub ingredients: IngredientSlots,
}
