// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses FITCOACH_* and OPENAI_* environment variables with sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Environment Configuration
//!
//! Loads the complete server configuration from environment variables. Every
//! setting has a default, so a bare `fitcoach-server` start works out of the
//! box (in canned-generation mode when no API key is present).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `FITCOACH_HTTP_PORT` | `3000` | HTTP listen port |
//! | `HOST` | `127.0.0.1` | Bind address |
//! | `OPENAI_API_KEY` | unset | Chat completions credential |
//! | `OPENAI_BASE_URL` | `https://api.openai.com/v1` | Completions endpoint |
//! | `FITCOACH_CHAT_MODEL` | `gpt-4o` | Model identifier |
//! | `FITCOACH_DEMO_MODE` | `false` | Force canned generation |
//! | `FITCOACH_LLM_TIMEOUT_SECS` | `30` | Upstream request timeout |

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP API
    pub http_port: u16,
    /// Interface to bind
    pub host: String,
    /// Generation backend configuration
    pub llm: LlmConfig,
}

/// Configuration for the plan and reply generation backend
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Chat completions credential; absent or placeholder keys select the
    /// canned backend
    pub api_key: Option<String>,
    /// Base URL of the `OpenAI`-compatible chat completions API
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
    /// Force canned generation regardless of credentials
    pub demo_mode: bool,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (port, timeout).
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("FITCOACH_HTTP_PORT", "3000")
                .parse()
                .context("Invalid FITCOACH_HTTP_PORT value")?,
            host: env_var_or("HOST", "127.0.0.1"),
            llm: LlmConfig {
                api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
                base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                model: env_var_or("FITCOACH_CHAT_MODEL", "gpt-4o"),
                demo_mode: bool_flag(&env_var_or("FITCOACH_DEMO_MODE", "false")),
                request_timeout_secs: env_var_or("FITCOACH_LLM_TIMEOUT_SECS", "30")
                    .parse()
                    .context("Invalid FITCOACH_LLM_TIMEOUT_SECS value")?,
            },
        };

        Ok(config)
    }

    /// Startup summary with the API key redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitCoach Server Configuration:\n\
             - HTTP Port: {}\n\
             - Host: {}\n\
             - LLM Base URL: {}\n\
             - LLM Model: {}\n\
             - LLM API Key: {}\n\
             - Demo Mode: {}\n\
             - LLM Timeout: {}s",
            self.http_port,
            self.host,
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "configured"
            } else {
                "not set"
            },
            self.llm.demo_mode,
            self.llm.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment flags accept "true" or "1" as on
fn bool_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        "FITCOACH_HTTP_PORT",
        "HOST",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "FITCOACH_CHAT_MODEL",
        "FITCOACH_DEMO_MODE",
        "FITCOACH_LLM_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_env();

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.http_port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.llm.api_key, None);
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.model, "gpt-4o");
        assert!(!config.llm.demo_mode);
        assert_eq!(config.llm.request_timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply() {
        clear_env();
        env::set_var("FITCOACH_HTTP_PORT", "8081");
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("FITCOACH_CHAT_MODEL", "gpt-4o-mini");
        env::set_var("FITCOACH_DEMO_MODE", "1");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.http_port, 8081);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert!(config.llm.demo_mode);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_counts_as_unset() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.llm.api_key, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        env::set_var("FITCOACH_HTTP_PORT", "not-a-port");

        assert!(ServerConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_summary_redacts_api_key() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-secret-value");

        let summary = ServerConfig::from_env().unwrap().summary();
        assert!(summary.contains("configured"));
        assert!(!summary.contains("sk-secret-value"));

        clear_env();
    }
}
