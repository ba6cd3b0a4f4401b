//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Remote meal fetches (outcome, latency)
//! - Meal acquisitions (compliant vs best-effort, fetches spent)
//! - Plan generation

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts};

// =============================================================================
// Meal Source Metrics
// =============================================================================

/// Remote meal fetches by outcome.
pub static MEAL_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("supper_meal_fetches_total", "Total random meal fetches"),
        &["status"], // "success", "unreachable", "bad_payload"
    )
    .unwrap()
});

/// Remote meal fetch duration in seconds.
pub static MEAL_FETCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "supper_meal_fetch_duration_seconds",
            "Duration of random meal fetches",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

// =============================================================================
// Acquisition Metrics
// =============================================================================

/// Single-meal acquisitions by result.
pub static ACQUISITIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("supper_acquisitions_total", "Total single-meal acquisitions"),
        &["result"], // "compliant", "best_effort", "failed"
    )
    .unwrap()
});

/// Fetches spent per successful acquisition.
pub static ACQUISITION_FETCHES: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "supper_acquisition_fetches",
            "Number of remote fetches issued per acquisition",
        )
        .buckets(vec![1.0, 2.0, 3.0, 5.0, 8.0, 10.0, 11.0]),
    )
    .unwrap()
});

// =============================================================================
// Plan Metrics
// =============================================================================

/// Meal plans generated by result.
pub static PLANS_GENERATED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("supper_plans_generated_total", "Total meal plan requests"),
        &["result"], // "success", "failed"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Meal source
        Box::new(MEAL_FETCHES.clone()),
        Box::new(MEAL_FETCH_DURATION.clone()),
        // Acquisition
        Box::new(ACQUISITIONS.clone()),
        Box::new(ACQUISITION_FETCHES.clone()),
        // Plans
        Box::new(PLANS_GENERATED.clone()),
    ]
}
