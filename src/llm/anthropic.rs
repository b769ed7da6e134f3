//! Anthropic messages API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::config::model::ANTHROPIC_DEFAULT_URL;
use crate::error::ProviderError;

use super::http::{finish_message, join_url, resolve_api_key, send_json};
use super::prompt::build_system_prompt;
use super::provider::{CommitProvider, GenerateRequest};

pub const PROVIDER_NAME: &str = "anthropic";
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";
pub const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    system: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Content,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Content {
    Blocks(Vec<ContentBlock>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// `POST {url}/v1/messages` with `x-api-key` and `anthropic-version` headers.
pub struct AnthropicProvider {
    client: reqwest::Client,
}

impl AnthropicProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Messages endpoint, tolerating a base URL that already ends in `/v1`.
fn endpoint(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        join_url(trimmed, ANTHROPIC_DEFAULT_URL, "messages")
    } else {
        join_url(trimmed, ANTHROPIC_DEFAULT_URL, "v1/messages")
    }
}

fn build_body<'a>(request: &GenerateRequest<'a>, system_prompt: &'a str) -> MessagesRequest<'a> {
    MessagesRequest {
        model: request.model,
        messages: vec![Message {
            role: "user",
            content: request.diff,
        }],
        system: system_prompt,
        max_tokens: request.max_tokens,
    }
}

/// Concatenate every `content[].text` block; non-text blocks are skipped.
fn extract_message(response: MessagesResponse) -> Result<String, ProviderError> {
    let text = match response.content {
        Content::Text(text) => text,
        Content::Blocks(blocks) => blocks.into_iter().filter_map(|b| b.text).collect(),
    };
    finish_message(PROVIDER_NAME, &text)
}

#[async_trait]
impl CommitProvider for AnthropicProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
        settings: &ProviderConfig,
    ) -> Result<String, ProviderError> {
        let api_key = resolve_api_key(PROVIDER_NAME, settings, API_KEY_ENV_VAR)?;
        let url = endpoint(&settings.url);
        let system_prompt = build_system_prompt(request.style, request.max_tokens);
        let body = build_body(request, &system_prompt);

        debug!("POST {} (model={}, max_tokens={})", url, request.model, request.max_tokens);

        let response: MessagesResponse = send_json(
            PROVIDER_NAME,
            self.client
                .post(&url)
                .header("x-api-key", api_key)
                .header("anthropic-version", API_VERSION)
                .json(&body),
        )
        .await?;

        extract_message(response)
    }
}
