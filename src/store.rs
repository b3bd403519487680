// ABOUTME: In-memory coaching data store with copy-in/copy-out CRUD semantics
// ABOUTME: Owns the profile, weekly plan, workout log, and chat history behind one mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Coach Store
//!
//! Single-tenant, memory-resident state container. The store exclusively owns
//! the four domain records; every read hands out an independent copy and every
//! write copies data in, so callers can never alias live state.
//!
//! Each operation is one critical section behind a [`std::sync::Mutex`], which
//! serializes same-resource operations in request-arrival order. Absence is
//! reported as `None`, `false`, or an empty collection; the store raises no
//! business errors. State lives and dies with the process.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;
use uuid::Uuid;

use crate::models::{
    ChatMessage, UserProfile, UserProfileUpdate, WorkoutDraft, WorkoutEntry, WorkoutPlan,
};

#[derive(Debug, Default)]
struct StoreState {
    profile: UserProfile,
    plan: Option<WorkoutPlan>,
    workouts: Vec<WorkoutEntry>,
    chat_history: Vec<ChatMessage>,
}

/// Mutex-guarded container for all coaching data
#[derive(Debug, Default)]
pub struct CoachStore {
    state: Mutex<StoreState>,
}

impl CoachStore {
    /// Create a store seeded with the default profile and no other data
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("coach store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    // ========================================
    // User profile
    // ========================================

    /// Get a copy of the user profile
    #[must_use]
    pub fn user_profile(&self) -> UserProfile {
        self.state().profile.clone()
    }

    /// Merge a partial update into the profile and return the new profile.
    ///
    /// Fields present in the update overwrite, including present-but-empty
    /// text; absent fields are preserved. No content validation happens here.
    pub fn update_user_profile(&self, update: UserProfileUpdate) -> UserProfile {
        let mut state = self.state();
        state.profile.apply(update);
        debug!("user profile updated");
        state.profile.clone()
    }

    // ========================================
    // Workout plan
    // ========================================

    /// Get a copy of the current weekly plan, or `None` before the first set
    #[must_use]
    pub fn workout_plan(&self) -> Option<WorkoutPlan> {
        self.state().plan.clone()
    }

    /// Replace the weekly plan in full and return the stored plan
    pub fn set_workout_plan(&self, plan: WorkoutPlan) -> WorkoutPlan {
        let mut state = self.state();
        state.plan = Some(plan.clone());
        debug!(days = plan.days.len(), "workout plan replaced");
        plan
    }

    // ========================================
    // Workout log
    // ========================================

    /// Get a copy of all logged workouts, newest first
    #[must_use]
    pub fn workout_entries(&self) -> Vec<WorkoutEntry> {
        self.state().workouts.clone()
    }

    /// Store a new workout at the head of the log and return it with its id.
    ///
    /// Ids are random UUIDs, so entries added within the same instant still
    /// get distinct ids.
    pub fn add_workout_entry(&self, draft: WorkoutDraft) -> WorkoutEntry {
        let entry = WorkoutEntry {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            details: draft.details,
        };

        let mut state = self.state();
        state.workouts.insert(0, entry.clone());
        debug!(id = %entry.id, "workout entry added");
        entry
    }

    /// Delete the workout with the given id.
    ///
    /// Returns `true` exactly once per id, then `false`; unknown ids are
    /// reported as `false` rather than an error.
    pub fn delete_workout_entry(&self, id: &str) -> bool {
        let mut state = self.state();
        let initial_len = state.workouts.len();
        state.workouts.retain(|entry| entry.id != id);

        let deleted = state.workouts.len() < initial_len;
        if deleted {
            debug!(%id, "workout entry deleted");
        }
        deleted
    }

    // ========================================
    // Chat history
    // ========================================

    /// Get a copy of the conversation, oldest first
    #[must_use]
    pub fn chat_history(&self) -> Vec<ChatMessage> {
        self.state().chat_history.clone()
    }

    /// Append a message to the conversation and return the full updated history
    pub fn add_chat_message(&self, message: ChatMessage) -> Vec<ChatMessage> {
        let mut state = self.state();
        state.chat_history.push(message);
        state.chat_history.clone()
    }

    /// Drop the whole conversation
    pub fn clear_chat_history(&self) {
        let mut state = self.state();
        let dropped = state.chat_history.len();
        state.chat_history.clear();
        debug!(dropped, "chat history cleared");
    }
}
