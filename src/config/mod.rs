// ABOUTME: Configuration module organization for the FitCoach server
// ABOUTME: Re-exports the environment-derived server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! Configuration management
//!
//! All configuration comes from environment variables (plus an optional
//! `.env` file); there is no config file format.

/// Environment variable parsing and configuration types
pub mod environment;

pub use environment::{LlmConfig, ServerConfig};
