// Groq API provider implementation
//
// Groq exposes an OpenAI-compatible chat-completions endpoint, so the wire
// format below is the standard {model, messages} request with a choices
// array in the response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::types::Message;
use super::CompletionProvider;
use crate::error::{Error, Result};

const GROQ_API_URL: &str = "https://api.groq.com";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP client for the Groq chat-completions API.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Precondition(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: GROQ_API_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn complete_once(&self, messages: &[Message], model: &str) -> Result<String> {
        let request = ChatRequest { model, messages };
        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        tracing::debug!("Sending completion request to {} (model {})", url, model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Service(format!("failed to send request to Groq API: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Error::Service(format!(
                "Groq API request failed\n\nStatus: {status}\nBody: {error_body}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Service(format!("failed to parse Groq API response: {e}")))?;

        tracing::debug!("Received response with {} choices", chat_response.choices.len());

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Service("Groq API returned no choices".to_string()))?;

        match choice.message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(Error::Service(
                "Groq API returned a choice without content".to_string(),
            )),
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String> {
        self.complete_once(messages, model).await
    }
}

// Groq wire types (OpenAI-compatible)

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
