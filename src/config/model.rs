//! Configuration data model and provider resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Style used when neither the CLI nor the file specifies one.
pub const DEFAULT_STYLE: &str = "concise";

pub const DEFAULT_MODEL: &str = "gpt-4.1";

pub const OPENAI_DEFAULT_URL: &str = "https://api.openai.com/v1";
pub const ANTHROPIC_DEFAULT_URL: &str = "https://api.anthropic.com";

/// Base URL a well-known provider gets when created without one.
pub fn builtin_url(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some(OPENAI_DEFAULT_URL),
        "anthropic" => Some(ANTHROPIC_DEFAULT_URL),
        _ => None,
    }
}

/// Connection settings and model list for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Overrides the default completion token limit for this provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// New entry for `name`, pre-filled with the built-in URL when known.
    pub fn for_name(name: &str) -> Self {
        Self {
            url: builtin_url(name).unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    fn with_models(url: &str, models: &[&str]) -> Self {
        Self {
            url: url.to_string(),
            api_key: None,
            max_tokens: None,
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn lists(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    /// Append `model` unless already listed. Returns whether it was added.
    pub fn add_model(&mut self, model: &str) -> bool {
        if self.lists(model) {
            return false;
        }
        self.models.push(model.to_string());
        true
    }

    /// Remove `model` if listed. Returns whether it was removed.
    pub fn remove_model(&mut self, model: &str) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m != model);
        self.models.len() != before
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        let mut providers = BTreeMap::new();
        providers.insert(
            "openai".to_string(),
            ProviderConfig::with_models(OPENAI_DEFAULT_URL, &["gpt-4.1", "gpt-3.5-turbo"]),
        );
        providers.insert(
            "anthropic".to_string(),
            ProviderConfig::with_models(ANTHROPIC_DEFAULT_URL, &["claude-3", "claude-instant"]),
        );

        Self {
            default_model: default_model(),
            style: default_style(),
            providers,
        }
    }
}

impl Configuration {
    /// Find the provider whose model list contains `model`.
    ///
    /// `config --model` keeps each model under one provider. A hand-edited
    /// file can still list it twice; then the first provider in name order
    /// wins (`anthropic` before `openai`) and a warning names the others.
    pub fn resolve_provider(&self, model: &str) -> Result<&str, ConfigError> {
        let owners = self.providers_listing(model);
        let (first, rest) = owners
            .split_first()
            .ok_or_else(|| ConfigError::ModelNotFound(model.to_string()))?;

        if !rest.is_empty() {
            warn!(
                "Model {} is listed by several providers ({}); using {}",
                model,
                owners.join(", "),
                first
            );
        }
        Ok(*first)
    }

    /// Names of every provider listing `model`, in name order.
    pub fn providers_listing(&self, model: &str) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|(_, provider)| provider.lists(model))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }

    /// Get the provider entry for `name`, creating it if absent.
    pub fn provider_mut_or_insert(&mut self, name: &str) -> &mut ProviderConfig {
        self.providers
            .entry(name.to_string())
            .or_insert_with(|| ProviderConfig::for_name(name))
    }

    /// The style to prompt with: explicit override, then the file, then the default.
    pub fn effective_style<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(style) if !style.trim().is_empty() => style,
            _ if !self.style.trim().is_empty() => &self.style,
            _ => DEFAULT_STYLE,
        }
    }

    /// The model to use: explicit override, else `defaultModel`.
    pub fn effective_model<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(model) if !model.trim().is_empty() => model,
            _ => &self.default_model,
        }
    }
}
