//! Remote meal source integration.
//!
//! The only remote operation the planner relies on is "fetch one random
//! meal". [`MealSource`] abstracts it so the acquisition engine can run
//! against TheMealDB in production and against a scripted mock in tests.

mod client;

pub use client::{MealDbClient, DEFAULT_BASE_URL};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::meal::Meal;

/// Errors that can occur when fetching from the meal source.
#[derive(Debug, Error)]
pub enum MealSourceError {
    /// Connection, DNS or timeout failure.
    #[error("Meal source unreachable: {0}")]
    Unreachable(String),

    /// Non-success HTTP status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Body could not be decoded into a meal.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The source answered but returned no meal.
    #[error("No meal data received")]
    EmptyResult,
}

/// Coarse classification of a [`MealSourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The remote could not be reached or refused to serve the request.
    Unreachable,
    /// The remote answered with an empty or malformed payload.
    BadPayload,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Unreachable => "unreachable",
            FailureKind::BadPayload => "bad_payload",
        }
    }
}

impl MealSourceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MealSourceError::Unreachable(_) | MealSourceError::ApiError { .. } => {
                FailureKind::Unreachable
            }
            MealSourceError::ParseError(_) | MealSourceError::EmptyResult => {
                FailureKind::BadPayload
            }
        }
    }
}

impl From<reqwest::Error> for MealSourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MealSourceError::ParseError(err.to_string())
        } else {
            MealSourceError::Unreachable(err.to_string())
        }
    }
}

/// A source of random meal records.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Short name used in logs and metrics.
    fn name(&self) -> &str;

    /// Fetch exactly one random meal.
    async fn random_meal(&self) -> Result<Meal, MealSourceError>;
}
