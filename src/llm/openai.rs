//! OpenAI chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::config::model::OPENAI_DEFAULT_URL;
use crate::error::ProviderError;

use super::http::{finish_message, join_url, resolve_api_key, send_json};
use super::prompt::build_system_prompt;
use super::provider::{CommitProvider, GenerateRequest};

pub const PROVIDER_NAME: &str = "openai";
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// `POST {url}/chat/completions` with bearer auth.
pub struct OpenAiProvider {
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn build_body<'a>(request: &GenerateRequest<'a>, system_prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model: request.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system_prompt,
            },
            ChatMessage {
                role: "user",
                content: request.diff,
            },
        ],
        max_tokens: request.max_tokens,
    }
}

/// Pull `choices[0].message.content` out of the response.
fn extract_message(response: ChatResponse) -> Result<String, ProviderError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::UnexpectedFormat {
            provider: PROVIDER_NAME.to_string(),
            detail: "no choices[0].message.content in response".to_string(),
        })?;

    finish_message(PROVIDER_NAME, &content)
}

#[async_trait]
impl CommitProvider for OpenAiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
        settings: &ProviderConfig,
    ) -> Result<String, ProviderError> {
        let api_key = resolve_api_key(PROVIDER_NAME, settings, API_KEY_ENV_VAR)?;
        let url = join_url(&settings.url, OPENAI_DEFAULT_URL, "chat/completions");
        let system_prompt = build_system_prompt(request.style, request.max_tokens);
        let body = build_body(request, &system_prompt);

        debug!("POST {} (model={}, max_tokens={})", url, request.model, request.max_tokens);

        let response: ChatResponse = send_json(
            PROVIDER_NAME,
            self.client.post(&url).bearer_auth(api_key).json(&body),
        )
        .await?;

        extract_message(response)
    }
}
