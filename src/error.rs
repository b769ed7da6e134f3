//! Error types for gitllm modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading, saving, or editing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Model {0} not found in configuration. Add it with: gitllm config --model {0} --provider <name>")]
    ModelNotFound(String),

    #[error("Failed to read configuration at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write configuration at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration at {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[source] serde_yaml::Error),

    #[error("{flag} requires --provider to know which provider to update")]
    MissingProvider { flag: &'static str },
}

/// Errors from invoking the git binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install git to use gitllm.")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        operation: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Staged diff is {size} bytes, more than the {limit} byte limit")]
    DiffTooLarge { size: usize, limit: usize },
}

/// Errors from LLM provider calls.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unsupported provider '{0}'. Supported providers: openai, anthropic")]
    Unsupported(String),

    #[error("{provider} API key is missing. Set it with: gitllm config --provider {provider} --apiKey <key>, or export {env_var}")]
    MissingApiKey {
        provider: String,
        env_var: &'static str,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{provider} request failed: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error (HTTP {status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Unexpected response format from {provider} API: {detail}")]
    UnexpectedFormat { provider: String, detail: String },

    #[error("{provider} returned an empty commit message")]
    EmptyMessage { provider: String },
}

/// Errors from the commit command.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error retrieving Git diff: {0}")]
    Diff(#[source] GitError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("Error generating commit message: {0}")]
    Provider(#[from] ProviderError),

    #[error("Failed to read confirmation: {0}")]
    Prompt(String),
}
