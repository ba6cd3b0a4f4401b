//! Mock meal source for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::meal::Meal;
use crate::mealdb::{MealSource, MealSourceError};

/// One scripted response.
#[derive(Debug)]
enum Scripted {
    Meal { meal: Meal, delay: Option<Duration> },
    Error(MealSourceError),
}

/// Mock implementation of the MealSource trait.
///
/// Responses are served in the order they were pushed, one per call to
/// `random_meal`. Once the script runs out the fallback meal is returned,
/// or `EmptyResult` if none is set.
///
/// # Example
///
/// ```rust,ignore
/// use supper_core::testing::{MockMealSource, fixtures};
///
/// let source = MockMealSource::new();
/// source.push_meal(fixtures::beef_wellington()).await;
/// source.push_meal(fixtures::veggie_stew()).await;
///
/// let meal = source.random_meal().await?;
/// assert_eq!(meal.title, "Beef Wellington");
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockMealSource {
    script: Arc<RwLock<VecDeque<Scripted>>>,
    fallback: Arc<RwLock<Option<Meal>>>,
    fetches: AtomicUsize,
}

impl Default for MockMealSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMealSource {
    pub fn new() -> Self {
        Self {
            script: Arc::new(RwLock::new(VecDeque::new())),
            fallback: Arc::new(RwLock::new(None)),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns the same meal.
    pub async fn always(meal: Meal) -> Self {
        let source = Self::new();
        source.set_fallback(meal).await;
        source
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Queue a meal.
    pub async fn push_meal(&self, meal: Meal) {
        self.script
            .write()
            .await
            .push_back(Scripted::Meal { meal, delay: None });
    }

    /// Queue a meal that resolves after `delay`.
    pub async fn push_meal_delayed(&self, meal: Meal, delay: Duration) {
        self.script.write().await.push_back(Scripted::Meal {
            meal,
            delay: Some(delay),
        });
    }

    /// Queue several meals at once.
    pub async fn push_meals(&self, meals: impl IntoIterator<Item = Meal>) {
        let mut script = self.script.write().await;
        for meal in meals {
            script.push_back(Scripted::Meal { meal, delay: None });
        }
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: MealSourceError) {
        self.script.write().await.push_back(Scripted::Error(error));
    }

    /// Meal returned whenever the script is empty.
    pub async fn set_fallback(&self, meal: Meal) {
        *self.fallback.write().await = Some(meal);
    }

    /// Drop all queued responses.
    pub async fn clear(&self) {
        self.script.write().await.clear();
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    /// Number of `random_meal` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of responses still queued.
    pub async fn remaining(&self) -> usize {
        self.script.read().await.len()
    }
}

#[async_trait]
impl MealSource for MockMealSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn random_meal(&self) -> Result<Meal, MealSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let next = self.script.write().await.pop_front();
        match next {
            Some(Scripted::Meal { meal, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                Ok(meal)
            }
            Some(Scripted::Error(err)) => Err(err),
            None => self
                .fallback
                .read()
                .await
                .clone()
                .ok_or(MealSourceError::EmptyResult),
        }
    }
}
