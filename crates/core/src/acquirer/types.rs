//! Acquisition outcome types.

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// Compliance-checked fetches an acquisition may spend before degrading.
pub const MAX_COMPLIANCE_ATTEMPTS: u32 = 10;

/// How an acquired meal relates to the requested exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    /// Evaluated and free of every exclusion (or no exclusions were given).
    Compliant,
    /// Returned unevaluated after the attempt budget ran out; may violate
    /// the exclusions.
    BestEffort,
}

impl Compliance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compliance::Compliant => "compliant",
            Compliance::BestEffort => "best_effort",
        }
    }
}

/// A meal produced by one acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
    pub meal: Meal,
    pub compliance: Compliance,
    /// Remote fetches issued, 1 through `MAX_COMPLIANCE_ATTEMPTS + 1`.
    pub fetches: u32,
}

impl Acquisition {
    pub fn is_best_effort(&self) -> bool {
        self.compliance == Compliance::BestEffort
    }
}
