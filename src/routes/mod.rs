// ABOUTME: Route module organization for the FitCoach HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! Route module for the FitCoach server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains route definitions and thin handler functions that delegate to
//! the store and the generation backend.

/// Coach conversation routes
pub mod chat;
/// Health check and system status routes
pub mod health;
/// Stored-resource CRUD routes
pub mod storage;
/// Weekly plan generation routes
pub mod workout_plan;

/// Coach conversation route handlers
pub use chat::ChatRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Stored-resource route handlers
pub use storage::StorageRoutes;
/// Plan generation route handlers
pub use workout_plan::WorkoutPlanRoutes;
