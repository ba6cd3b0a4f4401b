//! Testing utilities and mock implementations.
//!
//! [`MockMealSource`] stands in for TheMealDB so the acquisition engine,
//! the planner and the HTTP API can be exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use supper_core::testing::{MockMealSource, fixtures};
//! use supper_core::MealAcquirer;
//!
//! let source = Arc::new(MockMealSource::new());
//! source.push_meal(fixtures::veggie_stew()).await;
//!
//! let acquirer = MealAcquirer::new(source.clone());
//! ```

mod mock_meal_source;

pub use mock_meal_source::MockMealSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::meal::{Ingredient, IngredientSlots, Meal};

    /// Create a test meal. Ingredients are `(measure, name)` pairs filling
    /// slots 1.. in order; an empty measure is treated as absent.
    pub fn meal(id: &str, title: &str, category: &str, ingredients: &[(&str, &str)]) -> Meal {
        let slots = IngredientSlots::from_ingredients(
            ingredients
                .iter()
                .map(|&(measure, name)| Ingredient::new(name, Some(measure))),
        )
        .unwrap_or_default();

        Meal {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            area: "British".to_string(),
            instructions: format!("Prepare the {}.\nServe hot.", title.to_lowercase()),
            thumbnail: format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
            tags: Vec::new(),
            video: None,
            ingredients: slots,
        }
    }

    /// A meal that violates "beef".
    pub fn beef_wellington() -> Meal {
        meal(
            "52803",
            "Beef Wellington",
            "Beef",
            &[("500g", "Beef Fillet"), ("2 tbs", "Olive Oil"), ("1", "Puff Pastry")],
        )
    }

    /// A meal free of every common restriction.
    pub fn veggie_stew() -> Meal {
        meal(
            "52900",
            "Veggie Stew",
            "Vegetarian",
            &[("2", "Carrots"), ("1", "Onion"), ("400g", "Chopped Tomatoes")],
        )
    }

    /// A meal that violates "nuts" through an ingredient only.
    pub fn satay_noodles() -> Meal {
        meal(
            "52950",
            "Satay Noodles",
            "Pasta",
            &[("200g", "Rice Noodles"), ("3 tbs", "Peanuts"), ("", "Lime")],
        )
    }
}
