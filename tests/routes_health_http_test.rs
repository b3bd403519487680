// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests all health check endpoints without authentication requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for `/health` and `/ready`
//!
//! Validates that both endpoints are registered, respond without
//! authentication, and carry a parseable RFC 3339 timestamp.

mod helpers;

use helpers::axum_test::AxumTestRequest;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    fitcoach_server::routes::health::HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fitcoach-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_endpoint_response_structure() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/health").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert!(body.is_object());
    assert!(body["status"].is_string());
    assert!(body["version"].is_string());

    // Verify timestamp is in RFC 3339 format
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_response_structure() {
    let routes = health_routes();

    let response = AxumTestRequest::get("/ready").send(routes).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// Additional Integration Tests
// ============================================================================

#[tokio::test]
async fn test_all_health_endpoints_accessible() {
    let routes = health_routes();

    for endpoint in ["/health", "/ready"] {
        let response = AxumTestRequest::get(endpoint).send(routes.clone()).await;

        assert_eq!(response.status(), 200, "Endpoint {endpoint} should return 200");
    }
}

#[tokio::test]
async fn test_health_endpoints_on_the_full_router() {
    // Both endpoints must survive router assembly alongside the API routes
    let app = helpers::test_app();

    let health = AxumTestRequest::get("/health").send(app.clone()).await;
    let ready = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(health.status(), 200);
    assert_eq!(ready.status(), 200);
}

#[tokio::test]
async fn test_health_and_ready_return_different_status() {
    let routes = health_routes();

    let health_response = AxumTestRequest::get("/health").send(routes.clone()).await;
    let health_body: serde_json::Value = health_response.json();

    let ready_response = AxumTestRequest::get("/ready").send(routes).await;
    let ready_body: serde_json::Value = ready_response.json();

    assert_eq!(health_body["status"], "healthy");
    assert_eq!(ready_body["status"], "ready");
}
