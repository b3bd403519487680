// ABOUTME: OpenAI chat completions backend for live plan and reply generation
// ABOUTME: Works against any OpenAI-compatible endpoint with JSON-mode plan output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach

//! # `OpenAI` Backend
//!
//! Implementation of the [`CoachBackend`] trait against the `OpenAI` chat
//! completions API. The base URL is configurable, so any compatible endpoint
//! (Azure `OpenAI`, a local proxy) works as well.
//!
//! Plan generation sets `response_format` to `json_object` so the model
//! answers with a weekday-keyed JSON document.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::prompts::{self, COACH_SYSTEM_PROMPT, PLAN_SYSTEM_PROMPT};
use super::{CoachBackend, PlanInputs};
use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};
use crate::models::ChatMessage;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Chat completions request body
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Structured output selector, only sent for plan generation
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format: &'static str,
}

/// Message structure for the chat completions API
#[derive(Debug, Clone, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl OpenAiMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_owned(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Chat completions response body
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

/// Choice in a completions response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in a completions response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// API error response envelope
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// Live generation backend speaking the `OpenAI` chat completions protocol
pub struct OpenAiCoach {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCoach {
    /// Create a backend with the given credential and endpoint settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, config: &LlmConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
        })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Parse an error response body from the completions API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::generation(format!(
                    "OpenAI API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::generation(format!(
                    "OpenAI API rate limit exceeded: {}",
                    error_response.error.message
                )),
                400 => AppError::generation(format!(
                    "OpenAI API validation error: {}",
                    error_response.error.message
                )),
                _ => AppError::generation(format!(
                    "OpenAI API error: {} - {}",
                    error_type, error_response.error.message
                )),
            }
        } else {
            AppError::generation(format!(
                "OpenAI API error ({}): {}",
                status,
                body.chars().take(200).collect::<String>()
            ))
        }
    }

    /// Send a completion request and return the first choice's content
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn chat_completion(
        &self,
        messages: Vec<OpenAiMessage>,
        json_mode: bool,
    ) -> AppResult<String> {
        debug!("Sending chat completion request to {}", self.base_url);

        let request = OpenAiRequest {
            model: self.model.clone(),
            messages,
            response_format: json_mode.then_some(ResponseFormat {
                format: "json_object",
            }),
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to OpenAI API: {}", e);
                AppError::generation(format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read OpenAI API response: {}", e);
            AppError::generation(format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let parsed: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse OpenAI API response: {}", e);
            AppError::generation(format!("Failed to parse response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::generation("API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received completion: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(content)
    }
}

#[async_trait]
impl CoachBackend for OpenAiCoach {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_plan(&self, inputs: &PlanInputs) -> AppResult<String> {
        let messages = vec![
            OpenAiMessage::system(PLAN_SYSTEM_PROMPT),
            OpenAiMessage::user(prompts::plan_request(inputs)),
        ];

        self.chat_completion(messages, true).await
    }

    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<ChatMessage> {
        let mut messages = Vec::with_capacity(conversation.len() + 1);
        messages.push(OpenAiMessage::system(COACH_SYSTEM_PROMPT));
        messages.extend(conversation.iter().map(OpenAiMessage::from));

        let content = self.chat_completion(messages, false).await?;

        Ok(ChatMessage::assistant(content))
    }
}
