// ABOUTME: Weekly plan generation route handlers
// ABOUTME: Validates the intake answers and returns the generated plan text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! Weekly plan generation routes
//!
//! Takes the user's intake answers and returns the generated plan as raw
//! text. The endpoint neither parses nor stores the plan; the client decides
//! what to keep and saves it through the storage endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::errors::AppError;
use crate::llm::{CoachBackend, PlanInputs};
use crate::server::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Intake answers seeding the plan generation
///
/// `goals`, `health_status`, and `availability` must be non-empty; the other
/// two default to empty text.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    /// Training goals
    pub goals: String,
    /// Current health status
    pub health_status: String,
    /// Past workout history
    pub past_workouts: String,
    /// Weekly schedule availability
    pub availability: String,
    /// Free-form extra context
    pub additional_info: String,
}

/// Response carrying the generated plan text
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    /// Raw plan text, JSON-shaped when the backend honors the format request
    pub workout_plan: String,
}

// ============================================================================
// Workout Plan Routes
// ============================================================================

/// Plan generation routes handler
pub struct WorkoutPlanRoutes;

impl WorkoutPlanRoutes {
    /// Create all plan generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout-plan", post(Self::generate_plan))
            .with_state(resources)
    }

    /// Generate a weekly plan from the intake answers
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GeneratePlanRequest>,
    ) -> Result<Response, AppError> {
        if request.goals.is_empty()
            || request.health_status.is_empty()
            || request.availability.is_empty()
        {
            return Err(AppError::missing_field("Missing required fields"));
        }

        let inputs = PlanInputs {
            goals: request.goals,
            health_status: request.health_status,
            past_workouts: request.past_workouts,
            availability: request.availability,
            additional_info: request.additional_info,
        };

        let workout_plan = resources.coach.generate_plan(&inputs).await.map_err(|e| {
            error!("Plan generation failed: {e}");
            AppError::generation("Failed to generate workout plan")
        })?;

        Ok((StatusCode::OK, Json(GeneratePlanResponse { workout_plan })).into_response())
    }
}
