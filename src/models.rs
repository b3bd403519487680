// ABOUTME: Core domain models for the FitCoach server
// ABOUTME: Defines UserProfile, WorkoutPlan, WorkoutEntry, and ChatMessage records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Data Models
//!
//! The four records owned by the coaching store, in their wire shapes.
//!
//! ## Design Principles
//!
//! - **Wire fidelity**: Field names serialize in camelCase to match the
//!   dashboard client (`healthStatus`, `additionalInfo`, ...)
//! - **Typed variants**: Workout entry details are a tagged enum keyed by the
//!   entry `type`, so a strength session cannot carry ride fields
//! - **Closed weekday set**: Plans are keyed by a [`Weekday`] enum, making
//!   misspelled day names unrepresentable
//!
//! ## Core Models
//!
//! - [`UserProfile`]: Singleton free-text profile with partial-update merging
//! - [`WorkoutPlan`]: Weekly plan mapping weekdays to scheduled items
//! - [`WorkoutEntry`]: One logged workout with store-assigned id
//! - [`ChatMessage`]: One conversation turn between user and coach

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// User Profile
// ============================================================================

/// Free-text fitness profile for the single user of this process.
///
/// Exactly one instance exists per server; it is created with the defaults
/// below and only ever changed through [`UserProfile::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Training goals
    pub goals: String,
    /// Current health status and limitations
    pub health_status: String,
    /// Workout history summary
    pub past_workouts: String,
    /// Weekly schedule availability
    pub availability: String,
    /// Anything else the coach should know
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            goals: "Build strength and improve cardiovascular health".to_owned(),
            health_status: "Generally healthy, no injuries".to_owned(),
            past_workouts: "Regular cycling, occasional strength training".to_owned(),
            availability: "Weekdays after 6pm, weekends mornings".to_owned(),
            additional_info: None,
        }
    }
}

impl UserProfile {
    /// Merge a partial update into this profile.
    ///
    /// Fields present in the update overwrite, including present-but-empty
    /// text; absent fields are preserved.
    pub fn apply(&mut self, update: UserProfileUpdate) {
        if let Some(goals) = update.goals {
            self.goals = goals;
        }
        if let Some(health_status) = update.health_status {
            self.health_status = health_status;
        }
        if let Some(past_workouts) = update.past_workouts {
            self.past_workouts = past_workouts;
        }
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        if let Some(additional_info) = update.additional_info {
            self.additional_info = Some(additional_info);
        }
    }
}

/// Partial profile update; `None` fields leave the profile untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfileUpdate {
    /// Replacement training goals
    pub goals: Option<String>,
    /// Replacement health status
    pub health_status: Option<String>,
    /// Replacement workout history
    pub past_workouts: Option<String>,
    /// Replacement availability
    pub availability: Option<String>,
    /// Replacement additional notes
    pub additional_info: Option<String>,
}

// ============================================================================
// Workout Plan
// ============================================================================

/// Day of the week, serialized in lowercase (`"monday"` .. `"sunday"`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase wire name of this weekday
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

/// One scheduled item inside a weekly plan.
///
/// All fields are free text as produced by the plan generator (the `type`
/// here is the generator's label, not the logged-workout variant tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutItem {
    /// Kind of session, e.g. "Strength Training", "Cardio", "Rest"
    #[serde(rename = "type")]
    pub kind: String,
    /// What to do
    pub description: String,
    /// How long, e.g. "45 minutes"
    pub duration: String,
}

/// Weekly workout plan, serialized as a flat `{"monday": [...], ...}` map.
///
/// Days without scheduled items are simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Scheduled items per weekday, in calendar order
    #[serde(flatten)]
    pub days: BTreeMap<Weekday, Vec<WorkoutItem>>,
}

// ============================================================================
// Workout Log
// ============================================================================

/// Details of an outdoor or Peloton ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideDetails {
    /// Ride duration in minutes, as entered
    pub duration: String,
    /// Distance covered, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Details of a strength-training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthDetails {
    /// Session duration in minutes, as entered
    pub duration: String,
    /// Primary exercise name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    /// Working weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Repetitions per set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Number of sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Details of any other logged session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    /// Session duration in minutes, as entered
    pub duration: String,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Typed per-kind workout details.
///
/// Serializes adjacently tagged, so a flattened entry carries
/// `"type": "outdoor-ride", "details": {...}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "kebab-case")]
pub enum WorkoutDetails {
    /// Ride outside
    OutdoorRide(RideDetails),
    /// Ride on a Peloton bike
    PelotonRide(RideDetails),
    /// Weights or bodyweight strength work
    StrengthTraining(StrengthDetails),
    /// Anything else
    Other(SessionDetails),
}

/// A workout as submitted by the client, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    /// Calendar date of the workout, as entered (e.g. "2025-03-14")
    pub date: String,
    /// Typed workout details
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

/// A logged workout with its store-assigned identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Opaque unique id, assigned by the store and never reused
    pub id: String,
    /// Calendar date of the workout, as entered
    pub date: String,
    /// Typed workout details
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

// ============================================================================
// Chat
// ============================================================================

/// Role of a message in the coaching conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message written by the user
    User,
    /// Message produced by the coach
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in the coaching conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}
