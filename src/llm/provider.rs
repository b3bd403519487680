// ABOUTME: Unified generation backend selector for runtime backend switching
// ABOUTME: Chooses between the live OpenAI backend and the canned demo backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # Backend Selector
//!
//! Wraps the available generation backends behind one enum so handlers never
//! care which backend serves a request.
//!
//! ## Selection Rules
//!
//! The canned backend is chosen when any of these hold:
//! - `FITCOACH_DEMO_MODE` is enabled
//! - no `OPENAI_API_KEY` is configured
//! - the configured key contains the placeholder marker `dummy`
//!
//! Otherwise the live `OpenAI` backend is used.

use std::fmt;
use tracing::info;

use super::{CannedCoach, CoachBackend, OpenAiCoach, PlanInputs};
use crate::config::LlmConfig;
use crate::errors::AppResult;
use crate::models::ChatMessage;

/// Unified generation backend wrapping the live and canned implementations
///
/// This enum provides a consistent interface regardless of which
/// underlying backend is configured.
pub enum CoachProvider {
    /// Live `OpenAI`-compatible chat completions backend
    OpenAi(OpenAiCoach),
    /// Deterministic demo backend requiring no credentials
    Canned(CannedCoach),
}

impl CoachProvider {
    /// Select and construct a backend from the generation configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the live backend's HTTP client cannot be built.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        if config.demo_mode {
            info!("Demo mode enabled, using canned workout plans and replies");
            return Ok(Self::Canned(CannedCoach::new()));
        }

        let Some(api_key) = config.api_key.clone() else {
            info!("No OPENAI_API_KEY configured, using canned workout plans and replies");
            return Ok(Self::Canned(CannedCoach::new()));
        };

        if api_key.contains("dummy") {
            info!("Placeholder API key detected, using canned workout plans and replies");
            return Ok(Self::Canned(CannedCoach::new()));
        }

        info!(
            "Initializing OpenAI backend: base_url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self::OpenAi(OpenAiCoach::new(api_key, config)?))
    }
}

#[async_trait::async_trait]
impl CoachBackend for CoachProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenAi(backend) => backend.name(),
            Self::Canned(backend) => backend.name(),
        }
    }

    async fn generate_plan(&self, inputs: &PlanInputs) -> AppResult<String> {
        match self {
            Self::OpenAi(backend) => backend.generate_plan(inputs).await,
            Self::Canned(backend) => backend.generate_plan(inputs).await,
        }
    }

    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<ChatMessage> {
        match self {
            Self::OpenAi(backend) => backend.generate_reply(conversation).await,
            Self::Canned(backend) => backend.generate_reply(conversation).await,
        }
    }
}

impl fmt::Debug for CoachProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi(_) => f.debug_tuple("CoachProvider::OpenAi").finish(),
            Self::Canned(_) => f.debug_tuple("CoachProvider::Canned").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> LlmConfig {
        LlmConfig {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_owned(),
            model: "gpt-4o".to_owned(),
            demo_mode: false,
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_missing_key_selects_canned_backend() {
        let provider = CoachProvider::from_config(&base_config()).unwrap();
        assert_eq!(provider.name(), "canned");
    }

    #[test]
    fn test_demo_mode_overrides_real_key() {
        let config = LlmConfig {
            api_key: Some("sk-live-key".to_owned()),
            demo_mode: true,
            ..base_config()
        };

        let provider = CoachProvider::from_config(&config).unwrap();
        assert_eq!(provider.name(), "canned");
    }

    #[test]
    fn test_placeholder_key_selects_canned_backend() {
        let config = LlmConfig {
            api_key: Some("sk-dummy-key".to_owned()),
            ..base_config()
        };

        let provider = CoachProvider::from_config(&config).unwrap();
        assert_eq!(provider.name(), "canned");
    }

    #[test]
    fn test_real_key_selects_live_backend() {
        let config = LlmConfig {
            api_key: Some("sk-live-key".to_owned()),
            ..base_config()
        };

        let provider = CoachProvider::from_config(&config).unwrap();
        assert_eq!(provider.name(), "openai");
    }
}
