// ABOUTME: FitCoach API server binary with environment-driven configuration
// ABOUTME: Wires the in-memory store and generation backend into the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # FitCoach API Server Binary
//!
//! Starts the coaching API backed by the in-memory store and whichever
//! generation backend the environment selects.

use anyhow::Result;
use clap::Parser;
use fitcoach_server::{
    config::ServerConfig,
    llm::{CoachBackend, CoachProvider},
    logging,
    server::{CoachServer, ServerResources},
    store::CoachStore,
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "fitcoach-server")]
#[command(about = "FitCoach API - personal fitness coaching backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting FitCoach API server");
    info!("{}", config.summary());

    let coach = CoachProvider::from_config(&config.llm)?;
    info!("Generation backend selected: {}", coach.name());

    let resources = Arc::new(ServerResources::new(
        CoachStore::new(),
        coach,
        Arc::new(config.clone()),
    ));
    let server = CoachServer::new(resources);

    info!("Server starting on port {}", config.http_port);

    display_available_endpoints(&config);

    info!("Ready to coach!");

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints with their ports
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Storage API:");
    info!("   Read Resource:   GET    http://{host}:{port}/api/storage?resource={{name}}");
    info!("   Write Resource:  POST   http://{host}:{port}/api/storage?resource={{name}}");
    info!("   Delete Workout:  DELETE http://{host}:{port}/api/storage?resource=workout&id={{id}}");
    info!("   Clear Chat:      DELETE http://{host}:{port}/api/storage?resource=chat-history");
    info!("Generation:");
    info!("   Coach Chat:      POST http://{host}:{port}/api/chat");
    info!("   Weekly Plan:     POST http://{host}:{port}/api/workout-plan");
    info!("Monitoring:");
    info!("   Health Check:    GET  http://{host}:{port}/health");
    info!("   Readiness:       GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
