//! Apply `gitllm config` flags to a loaded configuration.

use tracing::{info, warn};

use crate::error::ConfigError;

use super::model::Configuration;

/// Provider that receives `--model` when `--provider` is not given.
pub const DEFAULT_EDIT_PROVIDER: &str = "openai";

/// Changes requested on the command line. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEdit {
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub provider: Option<String>,
    pub base_url: Option<String>,
    pub default_model: Option<String>,
}

impl ConfigEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Mutate `config` in place.
    ///
    /// A model is only ever listed by one provider: adding it to one removes
    /// it from the others.
    pub fn apply(&self, config: &mut Configuration) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            config.provider_mut_or_insert(provider);
        }

        if let Some(model) = &self.model {
            let target = self.provider.as_deref().unwrap_or(DEFAULT_EDIT_PROVIDER);

            for (name, provider) in config.providers.iter_mut() {
                if name != target && provider.remove_model(model) {
                    info!(model = %model, from = %name, to = %target, "moved model to new provider");
                }
            }

            if config.provider_mut_or_insert(target).add_model(model) {
                info!(model = %model, provider = %target, "added model");
            }
        }

        if let Some(url) = &self.base_url {
            let name = self.require_provider("--baseUrl")?;
            config.provider_mut_or_insert(name).url = url.clone();
        }

        if let Some(key) = &self.api_key {
            let name = self.require_provider("--apiKey")?;
            config.provider_mut_or_insert(name).api_key = Some(key.clone());
        }

        if let Some(model) = &self.default_model {
            if config.resolve_provider(model).is_err() {
                warn!(
                    "default model {} is not listed by any provider; add it with --model",
                    model
                );
            }
            config.default_model = model.clone();
        }

        Ok(())
    }

    fn require_provider(&self, flag: &'static str) -> Result<&str, ConfigError> {
        self.provider
            .as_deref()
            .ok_or(ConfigError::MissingProvider { flag })
    }
}
