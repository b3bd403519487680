// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum test client and canned-backend server construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use fitcoach_server::config::{LlmConfig, ServerConfig};
use fitcoach_server::llm::CoachProvider;
use fitcoach_server::server::{CoachServer, ServerResources};
use fitcoach_server::store::CoachStore;
use std::sync::Arc;

/// Build server resources wired to the canned generation backend
#[allow(dead_code)]
pub fn test_resources() -> Arc<ServerResources> {
    let config = ServerConfig {
        http_port: 3000,
        host: "127.0.0.1".to_owned(),
        llm: LlmConfig {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o".to_owned(),
            demo_mode: true,
            request_timeout_secs: 5,
        },
    };

    let coach = CoachProvider::from_config(&config.llm).expect("canned backend requires no setup");

    Arc::new(ServerResources::new(
        CoachStore::new(),
        coach,
        Arc::new(config),
    ))
}

/// Build the complete application router on fresh resources
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    CoachServer::new(test_resources()).router()
}
