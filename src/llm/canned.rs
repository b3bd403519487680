// ABOUTME: Canned generation backend for demo deployments and keyless development
// ABOUTME: Serves a fixed weekly plan and rotates through a small set of coach replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Canned Backend
//!
//! Deterministic stand-in for the live completions backend. Selected whenever
//! no usable API key is configured or demo mode is forced, so the whole API
//! stays exercisable without outbound network access.

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use super::{CoachBackend, PlanInputs};
use crate::errors::AppResult;
use crate::models::ChatMessage;

/// Fixed weekly plan returned by the canned backend
///
/// Shaped exactly like the JSON-mode output requested from the live backend:
/// weekday keys mapping to workout arrays.
pub const DEMO_WEEKLY_PLAN: &str = r#"{
  "monday": [
    {
      "type": "Strength Training",
      "description": "Upper body focus: 3 sets of push-ups, dumbbell presses, and rows",
      "duration": "45 minutes"
    }
  ],
  "tuesday": [
    {
      "type": "Cardio",
      "description": "Cycling session (moderate intensity)",
      "duration": "30 minutes"
    }
  ],
  "wednesday": [
    {
      "type": "Rest",
      "description": "Active recovery - light stretching or yoga",
      "duration": "20 minutes"
    }
  ],
  "thursday": [
    {
      "type": "Strength Training",
      "description": "Lower body: Squats, lunges, and calf raises",
      "duration": "45 minutes"
    }
  ],
  "friday": [
    {
      "type": "Cardio",
      "description": "Peloton ride (high intensity intervals)",
      "duration": "30 minutes"
    }
  ],
  "saturday": [
    {
      "type": "Strength Training",
      "description": "Full body workout with emphasis on core",
      "duration": "60 minutes"
    }
  ],
  "sunday": [
    {
      "type": "Rest",
      "description": "Complete rest day or light walking",
      "duration": "As needed"
    }
  ]
}"#;

/// Coaching replies the canned backend rotates through
pub const COACH_REPLIES: [&str; 5] = [
    "I'd recommend adding more strength training to help with your goals. How about we replace one cardio session with a strength workout?",
    "Based on your progress, I think we should increase the intensity of your workouts. Would you like to try some HIIT sessions?",
    "Your consistency is impressive! Let's add some variety to keep you motivated. How about trying a yoga session on your rest day?",
    "I notice you've been doing well with your workouts. Would you like to focus more on specific muscle groups or keep the full-body approach?",
    "Given your schedule constraints, I've adjusted your plan to include shorter, more intense workouts on busy days. Does that work for you?",
];

/// Deterministic generation backend requiring no credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCoach;

impl CannedCoach {
    /// Create a canned backend
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CoachBackend for CannedCoach {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn generate_plan(&self, _inputs: &PlanInputs) -> AppResult<String> {
        debug!("Using demo workout plan");
        Ok(DEMO_WEEKLY_PLAN.to_owned())
    }

    async fn generate_reply(&self, _conversation: &[ChatMessage]) -> AppResult<ChatMessage> {
        debug!("Using demo chat response");
        let idx = rand::thread_rng().gen_range(0..COACH_REPLIES.len());
        Ok(ChatMessage::assistant(COACH_REPLIES[idx]))
    }
}
