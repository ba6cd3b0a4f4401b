//! Meal plan API handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use supper_core::{
    render_printable, CookingInstruction, DaySelection, ExclusionSet, FailureKind, MealPlan,
    PlanError, PlanRequest,
};
use tracing::warn;

use crate::state::AppState;

const NO_DAYS_MESSAGE: &str = "Please select at least one day to generate a meal plan.";
const FETCH_FAILED_MESSAGE: &str = "Failed to generate meal plan. Please try again.";
const EMPTY_PLAN_MESSAGE: &str = "Please generate a meal plan first before printing.";

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub days: DaySelection,
    #[serde(default)]
    pub exclusions: ExclusionSet,
}

impl From<GeneratePlanRequest> for PlanRequest {
    fn from(body: GeneratePlanRequest) -> Self {
        Self {
            owner: body.name,
            days: body.days,
            exclusions: body.exclusions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub items: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    pub title: String,
    pub plan: MealPlan,
    pub shopping_list: ShoppingListResponse,
    pub instructions: Vec<CookingInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Entries returned without a compliance check after the attempt budget ran out.
    pub best_effort: usize,
}

impl From<MealPlan> for GeneratePlanResponse {
    fn from(plan: MealPlan) -> Self {
        let list = plan.shopping_list();
        Self {
            title: plan.title(),
            shopping_list: ShoppingListResponse {
                summary: list.summary(),
                items: list.items().to_vec(),
            },
            instructions: plan.instructions(),
            notice: plan.restrictions_notice(),
            best_effort: plan.best_effort_count(),
            plan,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl ErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            kind: None,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/plan
///
/// Generate a plan with one meal per selected day.
pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, impl IntoResponse> {
    match state.planner().generate(body.into()).await {
        Ok(plan) => Ok(Json(GeneratePlanResponse::from(plan))),
        Err(PlanError::NoDaysSelected) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(NO_DAYS_MESSAGE)),
        )),
        Err(PlanError::Fetch(e)) => {
            warn!(error = %e, "Plan request failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: FETCH_FAILED_MESSAGE.to_string(),
                    kind: Some(e.kind()),
                }),
            ))
        }
    }
}

/// POST /api/v1/plan/print
///
/// Render a previously generated plan as printable HTML.
pub async fn print_plan(
    State(state): State<Arc<AppState>>,
    Json(plan): Json<MealPlan>,
) -> Result<Html<String>, impl IntoResponse> {
    if plan.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(EMPTY_PLAN_MESSAGE)),
        ));
    }

    Ok(Html(render_printable(&plan, &state.print_options())))
}
