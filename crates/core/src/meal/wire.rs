//! TheMealDB response schema and decoding into [`Meal`].

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::types::{Ingredient, IngredientSlots, Meal, INGREDIENT_SLOTS};
use super::SlotError;

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Top-level response of the lookup endpoints (`random.php`, `lookup.php`).
#[derive(Debug, Deserialize)]
pub struct MealDbResponse {
    /// `null` when nothing matched.
    #[serde(default)]
    pub meals: Option<Vec<MealDbRecord>>,
}

/// One raw meal as TheMealDB sends it.
#[derive(Debug, Deserialize)]
pub struct MealDbRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub title: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Slot columns and anything else the API adds.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Why a raw record could not become a [`Meal`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing or blank field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is not a string")]
    NotAString(String),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

impl MealDbResponse {
    /// Take the first record, if any.
    pub fn into_first(self) -> Option<MealDbRecord> {
        self.meals.and_then(|meals| meals.into_iter().next())
    }
}

impl TryFrom<MealDbRecord> for Meal {
    type Error = DecodeError;

    fn try_from(record: MealDbRecord) -> Result<Self, Self::Error> {
        let ingredients = decode_slots(&record.extra)?;

        Ok(Meal {
            id: required(record.id, "idMeal")?,
            title: required(record.title, "strMeal")?,
            category: required(record.category, "strCategory")?,
            area: required(record.area, "strArea")?,
            instructions: required(record.instructions, "strInstructions")?,
            thumbnail: record.thumbnail.unwrap_or_default().trim().to_string(),
            tags: record
                .tags
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            video: non_blank(record.youtube),
            ingredients,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DecodeError> {
    non_blank(value).ok_or(DecodeError::MissingField(field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a slot column name like `strIngredient7` into its slot number.
fn slot_number(key: &str, prefix: &str) -> Option<usize> {
    key.strip_prefix(prefix)
        .filter(|n| !n.starts_with('0') && !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| (1..=INGREDIENT_SLOTS).contains(n))
}

fn optional_str<'a>(key: &str, value: &'a Value) -> Result<Option<&'a str>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(DecodeError::NotAString(key.to_string())),
    }
}

fn decode_slots(extra: &HashMap<String, Value>) -> Result<IngredientSlots, DecodeError> {
    let mut names: [Option<&str>; INGREDIENT_SLOTS] = [None; INGREDIENT_SLOTS];
    let mut measures: [Option<&str>; INGREDIENT_SLOTS] = [None; INGREDIENT_SLOTS];

    for (key, value) in extra {
        if let Some(slot) = slot_number(key, INGREDIENT_PREFIX) {
            names[slot - 1] = optional_str(key, value)?;
        } else if let Some(slot) = slot_number(key, MEASURE_PREFIX) {
            measures[slot - 1] = optional_str(key, value)?;
        }
    }

    let mut slots = IngredientSlots::new();
    for (index, name) in names.into_iter().enumerate() {
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            slots.set(index + 1, Ingredient::new(name, measures[index]))?;
        }
    }
    Ok(slots)
}
