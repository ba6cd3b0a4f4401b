use std::sync::Arc;
use supper_core::{Config, MealAcquirer, MealPlanner, MealSource, PrintOptions};

/// Shared application state
pub struct AppState {
    config: Config,
    planner: MealPlanner,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn MealSource>) -> Self {
        Self {
            config,
            planner: MealPlanner::new(MealAcquirer::new(source)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn planner(&self) -> &MealPlanner {
        &self.planner
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions::from(&self.config.print)
    }
}
