//! Plan generation.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::types::{MealPlan, PlanError, PlanRequest, PlannedMeal};
use crate::acquirer::MealAcquirer;
use crate::metrics::PLANS_GENERATED;

/// Turns a [`PlanRequest`] into a [`MealPlan`], one meal per selected day.
#[derive(Clone)]
pub struct MealPlanner {
    acquirer: MealAcquirer,
}

impl MealPlanner {
    pub fn new(acquirer: MealAcquirer) -> Self {
        Self { acquirer }
    }

    pub fn acquirer(&self) -> &MealAcquirer {
        &self.acquirer
    }

    /// Generate a plan. Fails without fetching when no day is selected.
    pub async fn generate(&self, request: PlanRequest) -> Result<MealPlan, PlanError> {
        if request.days.is_empty() {
            PLANS_GENERATED.with_label_values(&["failed"]).inc();
            return Err(PlanError::NoDaysSelected);
        }

        let owner = request
            .owner
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let acquisitions = match self
            .acquirer
            .acquire_meals(request.days.len(), &request.exclusions)
            .await
        {
            Ok(acquisitions) => acquisitions,
            Err(e) => {
                PLANS_GENERATED.with_label_values(&["failed"]).inc();
                warn!(
                    days = request.days.len(),
                    error = %e,
                    "Meal plan generation failed"
                );
                return Err(e.into());
            }
        };

        let entries: Vec<PlannedMeal> = request
            .days
            .iter()
            .zip(acquisitions)
            .map(|(day, acquisition)| PlannedMeal {
                day,
                meal: acquisition.meal,
                compliance: acquisition.compliance,
            })
            .collect();

        let plan = MealPlan {
            id: Uuid::new_v4(),
            owner,
            generated_at: Utc::now(),
            exclusions: request.exclusions,
            entries,
        };

        PLANS_GENERATED.with_label_values(&["success"]).inc();
        info!(
            plan_id = %plan.id,
            days = plan.entries.len(),
            restrictions = plan.exclusions.len(),
            best_effort = plan.best_effort_count(),
            "Generated meal plan"
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquirer::Compliance;
    use crate::mealdb::{MealSource, MealSourceError};
    use crate::plan::{Day, DaySelection};
    use crate::testing::{fixtures, MockMealSource};
    use std::sync::Arc;

    fn planner(source: &Arc<MockMealSource>) -> MealPlanner {
        MealPlanner::new(MealAcquirer::new(
            Arc::clone(source) as Arc<dyn MealSource>
        ))
    }

    #[tokio::test]
    async fn test_no_days_fails_without_fetching() {
        let source = Arc::new(MockMealSource::always(fixtures::veggie_stew()).await);

        let result = planner(&source).generate(PlanRequest::default()).await;

        assert!(matches!(result, Err(PlanError::NoDaysSelected)));
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_pairs_days_with_meals_positionally() {
        let source = Arc::new(MockMealSource::new());
        source
            .push_meals([
                fixtures::veggie_stew(),
                fixtures::beef_wellington(),
                fixtures::satay_noodles(),
            ])
            .await;

        let request = PlanRequest {
            owner: Some("  Jordan ".to_string()),
            days: DaySelection::from_days([Day::Friday, Day::Monday, Day::Wednesday]),
            exclusions: Default::default(),
        };
        let plan = planner(&source).generate(request).await.unwrap();

        let pairs: Vec<(Day, &str)> = plan
            .entries
            .iter()
            .map(|e| (e.day, e.meal.title.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Day::Friday, "Veggie Stew"),
                (Day::Monday, "Beef Wellington"),
                (Day::Wednesday, "Satay Noodles"),
            ]
        );
        assert_eq!(plan.owner.as_deref(), Some("Jordan"));
        assert_eq!(plan.title(), "Jordan's Meal Plan");
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_blank_owner_becomes_none() {
        let source = Arc::new(MockMealSource::always(fixtures::veggie_stew()).await);
        let request = PlanRequest {
            owner: Some("   ".to_string()),
            days: DaySelection::from_days([Day::Monday]),
            exclusions: Default::default(),
        };

        let plan = planner(&source).generate(request).await.unwrap();
        assert_eq!(plan.owner, None);
    }

    #[tokio::test]
    async fn test_best_effort_entries_are_flagged() {
        let source = Arc::new(MockMealSource::always(fixtures::satay_noodles()).await);
        let request = PlanRequest {
            owner: None,
            days: DaySelection::from_days([Day::Saturday]),
            exclusions: ["nuts"].into_iter().collect(),
        };

        let plan = planner(&source).generate(request).await.unwrap();

        assert_eq!(plan.entries[0].compliance, Compliance::BestEffort);
        assert_eq!(plan.best_effort_count(), 1);
        assert_eq!(source.fetch_count(), 11);
    }

    #[tokio::test]
    async fn test_fetch_failure_fails_plan() {
        let source = Arc::new(MockMealSource::new());
        source.push_meal(fixtures::veggie_stew()).await;
        source
            .push_error(MealSourceError::Unreachable("dns".to_string()))
            .await;

        let request = PlanRequest {
            owner: None,
            days: DaySelection::from_days([Day::Monday, Day::Tuesday]),
            exclusions: Default::default(),
        };
        let result = planner(&source).generate(request).await;

        assert!(matches!(result, Err(PlanError::Fetch(MealSourceError::Unreachable(_)))));
    }
}
