// src/assistant.rs

//! Client for the local Ollama instance backing the two language-model
//! paths: summarizing extracted page text and proposing replacement copy
//! for flagged issues.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const SUMMARIZE_SYSTEM_PROMPT: &str = "You will be given the text content of a website. \
Summarize the text into a shorter form such that the summary can be used later as context \
to further improve the content. Return only the summary without any additional text or \
explanation. The summary should be concise and capture the main points of the content.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },
}

pub struct Assistant {
    client: Client,
    base_url: String,
    model: String,
}

impl Assistant {
    /// Builds a client for the given Ollama endpoint and model. Generation
    /// can be slow on local hardware, so the timeout is generous.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    /// Produces a short natural-language summary of extracted page text.
    pub async fn summarize(&self, body_text: &str) -> Result<String, AssistantError> {
        self.generate(SUMMARIZE_SYSTEM_PROMPT, body_text).await
    }

    /// Produces a single-line replacement suggestion for a flagged issue,
    /// grounded in the page summary.
    pub async fn suggest_replacement(
        &self,
        issue_type: &str,
        description: &str,
        current_text: &str,
        summary: &str,
    ) -> Result<String, AssistantError> {
        let system = format!(
            "This is the summary of a website: {summary}. The user has an issue with the \
             content of the website. The user will provide the issue type and the element \
             that needs to be fixed. Provide the correct statement that should replace the \
             current text. The solution must be a single line and must not contain any code \
             or HTML tags."
        );
        let prompt = format!(
            "issue_type: {issue_type}, issue_description: {description}, \
             current_content: {current_text}"
        );
        self.generate(&system, &prompt).await
    }

    async fn generate(&self, system: &str, user: &str) -> Result<String, AssistantError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(system, user),
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;
        debug!(model = %generated.model, "Model response received.");
        Ok(generated.response.trim().to_string())
    }
}

fn build_prompt(system: &str, user: &str) -> String {
    format!("System: {system}\n\nUser: {user}\n\nAssistant:")
}

// Ollama API types.

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    model: String,
    response: String,
}
