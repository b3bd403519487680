// ABOUTME: Stored-resource route handlers for profile, plan, workout, and chat data
// ABOUTME: Provides the query-dispatched CRUD endpoint backed by the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! Stored-resource routes
//!
//! All persistent client state flows through one endpoint, `/api/storage`,
//! dispatched on the `resource` query parameter:
//!
//! | Method | `resource` | Body field | Result |
//! |---|---|---|---|
//! | GET | `profile` | | current profile |
//! | GET | `workout-plan` | | stored plan or `null` |
//! | GET | `workouts` | | entries, newest first |
//! | GET | `chat-history` | | conversation so far |
//! | POST | `profile` | `profile` | merged profile |
//! | POST | `workout-plan` | `plan` | stored plan |
//! | POST | `workout` | `workout` | entry with assigned id |
//! | POST | `chat-message` | `message` | full history |
//! | DELETE | `workout` (+`id`) | | `{"success": true}` |
//! | DELETE | `chat-history` | | `{"success": true}` |

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{ChatMessage, UserProfile, UserProfileUpdate, WorkoutDraft, WorkoutEntry, WorkoutPlan};
use crate::server::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters selecting the stored resource to operate on
#[derive(Debug, Deserialize)]
pub struct StorageQuery {
    /// Resource name (`profile`, `workout-plan`, `workouts`, `workout`, `chat-history`, `chat-message`)
    pub resource: Option<String>,
    /// Entry id, only meaningful for workout deletion
    pub id: Option<String>,
}

/// Write request body; exactly one field is read per resource
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageWriteBody {
    /// Partial profile update
    pub profile: Option<UserProfileUpdate>,
    /// Replacement weekly plan
    pub plan: Option<WorkoutPlan>,
    /// New workout entry without an id
    pub workout: Option<WorkoutDraft>,
    /// Chat message to append
    pub message: Option<ChatMessage>,
}

/// Profile read/write response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Current profile after any update
    pub profile: UserProfile,
}

/// Weekly plan read/write response; `plan` is `null` until one is stored
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    /// Stored plan, if any
    pub plan: Option<WorkoutPlan>,
}

/// Workout log listing, newest first
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    /// Logged entries
    pub workouts: Vec<WorkoutEntry>,
}

/// Single logged workout response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// Entry with its assigned id
    pub workout: WorkoutEntry,
}

/// Conversation history response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    /// Messages in insertion order
    pub messages: Vec<ChatMessage>,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the deletion took effect
    pub success: bool,
}

// ============================================================================
// Storage Routes
// ============================================================================

/// Stored-resource routes handler
pub struct StorageRoutes;

impl StorageRoutes {
    /// Create all storage routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/storage",
                get(Self::read_resource)
                    .post(Self::write_resource)
                    .delete(Self::delete_resource),
            )
            .with_state(resources)
    }

    /// Read a stored resource selected by the query
    async fn read_resource(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<StorageQuery>,
    ) -> Result<Response, AppError> {
        match query.resource.as_deref() {
            Some("profile") => {
                let profile = resources.store.user_profile();
                Ok((StatusCode::OK, Json(ProfileResponse { profile })).into_response())
            }
            Some("workout-plan") => {
                let plan = resources.store.workout_plan();
                Ok((StatusCode::OK, Json(WorkoutPlanResponse { plan })).into_response())
            }
            Some("workouts") => {
                let workouts = resources.store.workout_entries();
                Ok((StatusCode::OK, Json(WorkoutListResponse { workouts })).into_response())
            }
            Some("chat-history") => {
                let messages = resources.store.chat_history();
                Ok((StatusCode::OK, Json(ChatHistoryResponse { messages })).into_response())
            }
            _ => Err(AppError::invalid_resource("Invalid resource requested")),
        }
    }

    /// Create or update a stored resource selected by the query
    async fn write_resource(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<StorageQuery>,
        Json(body): Json<StorageWriteBody>,
    ) -> Result<Response, AppError> {
        match query.resource.as_deref() {
            Some("profile") => {
                // An absent profile field is treated as an empty update
                let update = body.profile.unwrap_or_default();
                let profile = resources.store.update_user_profile(update);
                Ok((StatusCode::OK, Json(ProfileResponse { profile })).into_response())
            }
            Some("workout-plan") => {
                let plan = body
                    .plan
                    .ok_or_else(|| AppError::missing_field("Missing plan data"))?;
                let plan = resources.store.set_workout_plan(plan);
                Ok((
                    StatusCode::OK,
                    Json(WorkoutPlanResponse { plan: Some(plan) }),
                )
                    .into_response())
            }
            Some("workout") => {
                let draft = body
                    .workout
                    .ok_or_else(|| AppError::missing_field("Missing workout data"))?;
                let workout = resources.store.add_workout_entry(draft);
                Ok((StatusCode::OK, Json(WorkoutResponse { workout })).into_response())
            }
            Some("chat-message") => {
                let message = body
                    .message
                    .ok_or_else(|| AppError::missing_field("Missing message data"))?;
                let messages = resources.store.add_chat_message(message);
                Ok((StatusCode::OK, Json(ChatHistoryResponse { messages })).into_response())
            }
            _ => Err(AppError::invalid_resource("Invalid resource requested")),
        }
    }

    /// Delete a workout entry or clear the conversation
    async fn delete_resource(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<StorageQuery>,
    ) -> Result<Response, AppError> {
        match (query.resource.as_deref(), query.id.as_deref()) {
            (Some("workout"), Some(id)) if !id.is_empty() => {
                if resources.store.delete_workout_entry(id) {
                    Ok((StatusCode::OK, Json(DeleteResponse { success: true })).into_response())
                } else {
                    Err(AppError::not_found("Workout"))
                }
            }
            (Some("chat-history"), _) => {
                resources.store.clear_chat_history();
                Ok((StatusCode::OK, Json(DeleteResponse { success: true })).into_response())
            }
            _ => Err(AppError::invalid_resource("Invalid resource or missing ID")),
        }
    }
}
