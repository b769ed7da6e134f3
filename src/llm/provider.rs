//! Provider trait and the name-keyed registry used for dispatch.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::config::ProviderConfig;
use crate::error::ProviderError;

use super::anthropic::AnthropicProvider;
use super::openai::OpenAiProvider;

/// Completion token limit when the provider config does not set one.
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Everything a provider needs to produce one commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest<'a> {
    pub diff: &'a str,
    pub model: &'a str,
    pub style: &'a str,
    pub max_tokens: u32,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(diff: &'a str, model: &'a str, style: &'a str) -> Self {
        Self {
            diff,
            model,
            style,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Apply the provider's `maxTokens` override, if any.
    pub fn with_settings(mut self, settings: &ProviderConfig) -> Self {
        if let Some(max) = settings.max_tokens {
            self.max_tokens = max;
        }
        self
    }
}

/// An LLM vendor that can write a commit message for a diff.
#[async_trait]
pub trait CommitProvider: Send + Sync {
    /// Registry key, matching the provider name in the config file.
    fn name(&self) -> &str;

    /// Send one request and return the trimmed message text.
    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
        settings: &ProviderConfig,
    ) -> Result<String, ProviderError>;
}

/// Providers keyed by name.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Box<dyn CommitProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the OpenAI and Anthropic clients sharing `client`.
    pub fn builtin(client: reqwest::Client) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(OpenAiProvider::new(client.clone())));
        registry.register(Box::new(AnthropicProvider::new(client)));
        registry
    }

    /// Add or replace the provider under its own name.
    pub fn register(&mut self, provider: Box<dyn CommitProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn get(&self, name: &str) -> Result<&dyn CommitProvider, ProviderError> {
        self.providers
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| ProviderError::Unsupported(name.to_string()))
    }
}
