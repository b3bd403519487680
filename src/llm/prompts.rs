// ABOUTME: System prompts for plan and reply generation
// ABOUTME: Provides the coaching persona and the plan request template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # System Prompts
//!
//! Prompts sent ahead of every generation request. The plan prompt instructs
//! the model to answer with a JSON object keyed by weekday so the client can
//! render it directly.

use super::PlanInputs;

/// System prompt for weekly plan generation
pub const PLAN_SYSTEM_PROMPT: &str = "You are a professional fitness coach. Create a detailed weekly workout plan based on the user's goals, health status, past workouts, and schedule availability. Format the response as a JSON object with days of the week as keys and workout details as values.";

/// System prompt for conversational coaching replies
pub const COACH_SYSTEM_PROMPT: &str = "You are a professional fitness coach. Provide helpful, motivating, and personalized fitness advice based on the user's goals and needs. Be conversational but focused on fitness guidance.";

/// Render the user-facing plan request from the submitted answers
#[must_use]
pub fn plan_request(inputs: &PlanInputs) -> String {
    format!(
        "Please create a weekly workout plan for me with the following information:\n \
         Goals: {}\n \
         Current Health Status: {}\n \
         Past Workouts: {}\n \
         Schedule Availability: {}\n \
         Additional Information: {}",
        inputs.goals,
        inputs.health_status,
        inputs.past_workouts,
        inputs.availability,
        inputs.additional_info,
    )
}
