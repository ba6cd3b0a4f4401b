//! Meal acquisition engine.
//!
//! A single acquisition samples random meals until one passes the
//! exclusion check, spending at most [`MAX_COMPLIANCE_ATTEMPTS`] checked
//! fetches. When the budget runs out it issues one more fetch and returns
//! that meal unevaluated, tagged [`Compliance::BestEffort`]. A failed fetch
//! ends the acquisition immediately.
//!
//! A batch runs `count` acquisitions concurrently on the caller's task and
//! keeps results in invocation order.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, warn};

use super::types::{Acquisition, Compliance, MAX_COMPLIANCE_ATTEMPTS};
use crate::filter::ExclusionSet;
use crate::mealdb::{MealSource, MealSourceError};
use crate::metrics::{ACQUISITIONS, ACQUISITION_FETCHES};

/// Acquisition state machine.
#[derive(Debug)]
enum AcquisitionState {
    /// `rejected` candidates have failed the exclusion check so far.
    Sampling { rejected: u32 },
    /// Budget exhausted; the next fetch is returned as-is.
    Degraded,
    Succeeded(Acquisition),
    Failed(MealSourceError),
}

/// Obtains meals that satisfy an exclusion set from a [`MealSource`].
#[derive(Clone)]
pub struct MealAcquirer {
    source: Arc<dyn MealSource>,
}

impl MealAcquirer {
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Acquire one meal.
    pub async fn acquire_meal(
        &self,
        exclusions: &ExclusionSet,
    ) -> Result<Acquisition, MealSourceError> {
        let mut state = AcquisitionState::Sampling { rejected: 0 };

        loop {
            state = match state {
                AcquisitionState::Sampling { rejected } if rejected >= MAX_COMPLIANCE_ATTEMPTS => {
                    AcquisitionState::Degraded
                }
                AcquisitionState::Sampling { rejected } => self.sample(rejected, exclusions).await,
                AcquisitionState::Degraded => self.fetch_unchecked().await,
                AcquisitionState::Succeeded(acquisition) => {
                    ACQUISITIONS
                        .with_label_values(&[acquisition.compliance.as_str()])
                        .inc();
                    ACQUISITION_FETCHES.observe(f64::from(acquisition.fetches));
                    return Ok(acquisition);
                }
                AcquisitionState::Failed(err) => {
                    ACQUISITIONS.with_label_values(&["failed"]).inc();
                    return Err(err);
                }
            };
        }
    }

    /// Acquire `count` meals concurrently.
    ///
    /// Position `i` of the result belongs to the `i`-th acquisition. If any
    /// acquisition fails the whole batch fails and the others are dropped.
    pub async fn acquire_meals(
        &self,
        count: usize,
        exclusions: &ExclusionSet,
    ) -> Result<Vec<Acquisition>, MealSourceError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        debug!(
            count,
            exclusions = exclusions.len(),
            source = self.source.name(),
            "Acquiring meal batch"
        );

        try_join_all((0..count).map(|_| self.acquire_meal(exclusions)))
            .await
            .inspect_err(|e| warn!(error = %e, kind = ?e.kind(), "Meal batch failed"))
    }

    async fn sample(&self, rejected: u32, exclusions: &ExclusionSet) -> AcquisitionState {
        let candidate = match self.source.random_meal().await {
            Ok(meal) => meal,
            Err(err) => {
                warn!(attempt = rejected + 1, error = %err, "Meal fetch failed");
                return AcquisitionState::Failed(err);
            }
        };
        let fetches = rejected + 1;

        if exclusions.is_empty() {
            return AcquisitionState::Succeeded(Acquisition {
                meal: candidate,
                compliance: Compliance::Compliant,
                fetches,
            });
        }

        match exclusions.first_match(&candidate) {
            None => AcquisitionState::Succeeded(Acquisition {
                meal: candidate,
                compliance: Compliance::Compliant,
                fetches,
            }),
            Some(fragment) => {
                debug!(
                    attempt = fetches,
                    title = %candidate.title,
                    fragment,
                    "Rejected candidate"
                );
                AcquisitionState::Sampling { rejected: fetches }
            }
        }
    }

    async fn fetch_unchecked(&self) -> AcquisitionState {
        warn!(
            attempts = MAX_COMPLIANCE_ATTEMPTS,
            "Could not find meal without filtered ingredients, returning best-effort meal"
        );

        match self.source.random_meal().await {
            Ok(meal) => AcquisitionState::Succeeded(Acquisition {
                meal,
                compliance: Compliance::BestEffort,
                fetches: MAX_COMPLIANCE_ATTEMPTS + 1,
            }),
            Err(err) => {
                warn!(error = %err, "Best-effort meal fetch failed");
                AcquisitionState::Failed(err)
            }
        }
    }
}
