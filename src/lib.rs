// ABOUTME: Main library entry point for the FitCoach API server
// ABOUTME: Provides the coaching data store, generation backends, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

#![deny(unsafe_code)]

//! # FitCoach Server
//!
//! Backend for a personal fitness-coaching dashboard. Serves a generated weekly
//! workout plan, an AI coach chat, and a workout log over a small REST surface.
//!
//! ## Features
//!
//! - **In-memory store**: Single-tenant profile, plan, workout, and chat state
//!   with copy-in/copy-out semantics
//! - **AI generation**: Workout plans and coach replies via any
//!   `OpenAI`-compatible chat completions API
//! - **Demo fallback**: Deterministic canned plan and coaching replies when no
//!   API key is configured or demo mode is enabled
//!
//! ## Architecture
//!
//! - **Models**: Domain records (profile, plan, workout entries, chat messages)
//! - **Store**: Mutex-guarded state container owning all records
//! - **Llm**: Generation backend trait with a live and a canned implementation
//! - **Routes**: Thin axum handlers mapping resources onto store operations
//! - **Server**: Resource container, router assembly, and graceful shutdown
//!
//! ## Example
//!
//! ```rust
//! use fitcoach_server::models::ChatMessage;
//! use fitcoach_server::store::CoachStore;
//!
//! let store = CoachStore::new();
//! let history = store.add_chat_message(ChatMessage::user("How do I warm up?"));
//! assert_eq!(history.len(), 1);
//! ```

/// Configuration management from environment variables
pub mod config;

/// Unified error handling and HTTP error responses
pub mod errors;

/// Generation backends for workout plans and coach replies
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Core domain models
pub mod models;

/// HTTP route definitions organized by domain
pub mod routes;

/// Server resources and HTTP serving
pub mod server;

/// In-memory coaching data store
pub mod store;
