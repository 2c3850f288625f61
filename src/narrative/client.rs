//! Chat-completions client for OpenAI-compatible endpoints (Groq by default).
//! One blocking, non-streaming request per prompt; no retries.

use super::{NarrativeRequest, TextGenerator};
use crate::config::NarrativeConfig;
use crate::error::NarrativeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// First choice's message content.
pub(crate) fn parse_completion(body: &str) -> Result<String, NarrativeError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| NarrativeError::MalformedResponse {
            reason: e.to_string(),
        })?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| NarrativeError::MalformedResponse {
            reason: "no message content in first choice".to_string(),
        })
}

pub struct ChatCompletionClient {
    client: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl ChatCompletionClient {
    /// Reads the API key from the environment variable named in the config.
    pub fn from_env(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| NarrativeError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;
        Self::new(config, api_key)
    }

    pub fn new(config: &NarrativeConfig, api_key: impl Into<String>) -> Result<Self, NarrativeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| NarrativeError::Client {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            url: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TextGenerator for ChatCompletionClient {
    fn complete(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let body = ChatRequest {
            model: &request.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };
        debug!(kind = ?request.kind, model = %request.model, prompt = %request.prompt, "sending prompt");

        let transport = |e: reqwest::Error| NarrativeError::Transport {
            url: self.url.clone(),
            reason: e.to_string(),
        };
        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(transport)?;
        let status = res.status();
        let text = res.text().map_err(transport)?;
        if !status.is_success() {
            return Err(NarrativeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let content = parse_completion(&text)?;
        info!(kind = ?request.kind, model = %request.model, chars = content.len(), "completion received");
        Ok(content)
    }
}
