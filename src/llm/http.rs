//! Shared HTTP plumbing for provider clients.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::ProviderError;

/// Default request timeout for provider calls (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "GITLLM_HTTP_TIMEOUT";

/// Longest error body carried verbatim into an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Get the configured timeout duration.
///
/// Reads from GITLLM_HTTP_TIMEOUT if set, otherwise 120 seconds. An invalid
/// value logs a warning and falls back to the default.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Build the HTTP client shared by all providers.
pub fn build_client() -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(get_timeout())
        .user_agent(concat!("gitllm/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ProviderError::ClientBuild)
}

/// Join a base URL and a path, ignoring trailing slashes on the base.
///
/// A blank base falls back to `default_base`.
pub fn join_url(base: &str, default_base: &str, path: &str) -> String {
    let base = if base.trim().is_empty() { default_base } else { base.trim() };
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// API key from the provider config, falling back to `env_var`.
pub fn resolve_api_key(
    provider: &str,
    settings: &ProviderConfig,
    env_var: &'static str,
) -> Result<String, ProviderError> {
    if let Some(key) = settings.api_key.as_deref()
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    if let Ok(key) = env::var(env_var)
        && !key.trim().is_empty()
    {
        debug!("Using {} for {} API key", env_var, provider);
        return Ok(key.trim().to_string());
    }

    Err(ProviderError::MissingApiKey {
        provider: provider.to_string(),
        env_var,
    })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Reduce an error response body to its `error.message`, or truncate it.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Send a prepared request and decode a successful JSON body into `T`.
///
/// Non-2xx responses become `ProviderError::Api`; bodies that do not match
/// `T` become `ProviderError::UnexpectedFormat`.
pub async fn send_json<T: DeserializeOwned>(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let http_error = |source| ProviderError::Http {
        provider: provider.to_string(),
        source,
    };

    let response = request.send().await.map_err(http_error)?;
    let status = response.status();
    let body = response.text().await.map_err(http_error)?;

    debug!("{} responded with HTTP {} ({} bytes)", provider, status.as_u16(), body.len());

    if !status.is_success() {
        return Err(ProviderError::Api {
            provider: provider.to_string(),
            status: status.as_u16(),
            message: extract_error_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::UnexpectedFormat {
        provider: provider.to_string(),
        detail: e.to_string(),
    })
}

/// Trim a generated message, rejecting an empty result.
pub fn finish_message(provider: &str, text: &str) -> Result<String, ProviderError> {
    let message = text.trim();
    if message.is_empty() {
        return Err(ProviderError::EmptyMessage {
            provider: provider.to_string(),
        });
    }
    Ok(message.to_string())
}
