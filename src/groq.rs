//! Chat-completion client for the question generator (OpenAI-compatible API).

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::GroqError;
use crate::http_client::http_client;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl GroqClient {
    pub fn from_config(cfg: &Config) -> Result<Self, GroqError> {
        let api_key = cfg.groq_api_key.clone().ok_or(GroqError::MissingApiKey)?;
        Ok(Self {
            api_key,
            model: cfg.groq_model.clone(),
            base_url: cfg.groq_base_url.clone(),
            timeout_secs: cfg.groq_timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generate_questions(&self, prompt: &str) -> Result<String, GroqError> {
        let client = http_client(self.timeout_secs)?;
        let url = format!("{}/chat/completions", self.base_url);
        let body = build_request(&self.model, prompt);

        info!(model = self.model.as_str(), "requesting press conference questions");
        let resp = client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()?;
        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "question generation failed");
            return Err(GroqError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_completion(&text)
    }
}

pub fn build_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    }
}

/// Extracts the first choice's text from a chat-completion response body.
pub fn parse_completion(body: &str) -> Result<String, GroqError> {
    let resp: ChatResponse = serde_json::from_str(body)?;
    resp.choices
        .into_iter()
        .filter_map(|c| c.message.and_then(|m| m.content))
        .map(|c| c.trim().to_string())
        .find(|c| !c.is_empty())
        .ok_or(GroqError::EmptyResponse)
}
