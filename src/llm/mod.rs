// ABOUTME: Generation backend abstraction for workout plans and coaching replies
// ABOUTME: Defines the contract implemented by the OpenAI and canned backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Generation Backends
//!
//! This module defines the contract that generation backends implement to
//! produce weekly workout plans and coaching replies. Two backends exist:
//! a live `OpenAI`-compatible chat completions client and a canned backend
//! used for demo deployments and keyless development.
//!
//! ## Example: Generating a Reply
//!
//! ```rust,no_run
//! use fitcoach_server::llm::{CannedCoach, CoachBackend};
//! use fitcoach_server::models::ChatMessage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fitcoach_server::errors::AppError> {
//!     let coach = CannedCoach::new();
//!     let reply = coach
//!         .generate_reply(&[ChatMessage::user("How should I pace a long ride?")])
//!         .await?;
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```

mod canned;
mod openai;
pub mod prompts;
mod provider;

pub use canned::{CannedCoach, COACH_REPLIES, DEMO_WEEKLY_PLAN};
pub use openai::OpenAiCoach;
pub use provider::CoachProvider;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::ChatMessage;

// ============================================================================
// Plan Inputs
// ============================================================================

/// User-supplied answers that seed a weekly plan generation
#[derive(Debug, Clone)]
pub struct PlanInputs {
    /// Training goals
    pub goals: String,
    /// Current health status
    pub health_status: String,
    /// Past workout history
    pub past_workouts: String,
    /// Weekly schedule availability
    pub availability: String,
    /// Free-form extra context, may be empty
    pub additional_info: String,
}

// ============================================================================
// Backend Trait
// ============================================================================

/// Generation backend for workout plans and coaching replies
///
/// Implement this trait to add a new backend. The design follows the
/// async trait pattern for compatibility with the tokio runtime.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    /// Unique backend identifier (e.g., "openai", "canned")
    fn name(&self) -> &'static str;

    /// Generate a weekly workout plan as raw text
    ///
    /// The live backend requests JSON-object output from the model; the
    /// returned string is handed to the client verbatim.
    async fn generate_plan(&self, inputs: &PlanInputs) -> AppResult<String>;

    /// Generate the next coaching reply for a conversation
    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<ChatMessage>;
}
