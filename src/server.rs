// ABOUTME: HTTP server assembly wiring routes, middleware, and shared resources
// ABOUTME: Owns the resource container and the serve loop with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Server Assembly
//!
//! [`ServerResources`] is the dependency container handed to every route
//! module, and [`CoachServer`] composes the routers, layers CORS and request
//! tracing on top, and runs the listener until a shutdown signal arrives.

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::CoachProvider;
use crate::routes::{ChatRoutes, HealthRoutes, StorageRoutes, WorkoutPlanRoutes};
use crate::store::CoachStore;

/// Centralized resource container for dependency injection
///
/// Holds the shared state every handler needs so route modules never
/// construct their own store or generation backend.
#[derive(Debug)]
pub struct ServerResources {
    /// In-memory store owning all coaching data
    pub store: CoachStore,
    /// Selected generation backend
    pub coach: CoachProvider,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(store: CoachStore, coach: CoachProvider, config: Arc<ServerConfig>) -> Self {
        Self {
            store,
            coach,
            config,
        }
    }
}

/// HTTP server for the coaching API
pub struct CoachServer {
    resources: Arc<ServerResources>,
}

impl CoachServer {
    /// Create a server around the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(StorageRoutes::routes(self.resources.clone()))
            .merge(ChatRoutes::routes(self.resources.clone()))
            .merge(WorkoutPlanRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind the configured address and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    /// while running.
    pub async fn run(&self) -> AppResult<()> {
        let addr = format!(
            "{}:{}",
            self.resources.config.host, self.resources.config.http_port
        );

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("FitCoach API listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        info!("FitCoach API shut down");

        Ok(())
    }
}

/// Resolve when the process receives Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
