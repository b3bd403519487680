// ABOUTME: Coach conversation route handlers for reply generation
// ABOUTME: Turns the submitted conversation into the coach's next reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! Coach conversation routes
//!
//! Accepts the running conversation and returns the coach's next reply from
//! the configured generation backend. The reply is not persisted here; the
//! client appends it through the storage endpoint when it chooses to.

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
use crate::llm::CoachBackend;
use crate::models::ChatMessage;
use crate::server::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request carrying the conversation so far
#[derive(Debug, Deserialize)]
pub struct ChatGenerationRequest {
    /// Conversation messages, oldest first; must be non-empty
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

/// Response carrying the generated coach reply
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatGenerationResponse {
    /// Assistant reply for the client to display and persist
    pub response: ChatMessage,
}

// ============================================================================
// Chat Routes
// ============================================================================

/// Coach conversation routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all conversation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat", post(Self::generate_reply))
            .with_state(resources)
    }

    /// Generate the next coach reply for the submitted conversation
    async fn generate_reply(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ChatGenerationRequest>,
    ) -> Result<Response, AppError> {
        let messages = request
            .messages
            .filter(|messages| !messages.is_empty())
            .ok_or_else(|| AppError::invalid_input("Missing or invalid messages"))?;

        let reply = resources
            .coach
            .generate_reply(&messages)
            .await
            .map_err(|e| {
                error!("Chat generation failed: {e}");
                AppError::generation("Failed to chat with fitness coach")
            })?;

        Ok((StatusCode::OK, Json(ChatGenerationResponse { response: reply })).into_response())
    }
}
