pub mod acquirer;
pub mod config;
pub mod filter;
pub mod instructions;
pub mod meal;
pub mod mealdb;
pub mod metrics;
pub mod plan;
pub mod print;
pub mod shopping;
pub mod testing;

pub use acquirer::{Acquisition, Compliance, MealAcquirer, MAX_COMPLIANCE_ATTEMPTS};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, MealDbConfig,
    PrintConfig, ServerConfig,
};
pub use filter::{ExclusionSet, COMMON_RESTRICTIONS};
pub use instructions::CookingInstruction;
pub use meal::{Ingredient, IngredientSlots, Meal, SlotError, INGREDIENT_SLOTS};
pub use mealdb::{FailureKind, MealDbClient, MealSource, MealSourceError};
pub use plan::{Day, DaySelection, MealPlan, MealPlanner, PlanError, PlanRequest, PlannedMeal};
pub use print::{render_printable, PrintOptions};
pub use shopping::ShoppingList;
