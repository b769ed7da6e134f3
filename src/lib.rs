//! gitllm - A CLI tool that proposes commit messages for staged changes.
//!
//! # Overview
//!
//! gitllm reads the staged git diff, asks the LLM provider that owns the
//! requested model (OpenAI or Anthropic) for a conventional-commit message,
//! and commits with it once the user confirms. Provider settings and model
//! lists live in `.gitllm/config.yml` in the working directory.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;

// Re-export commonly used types
pub use commit::{CommitOptions, CommitOutcome, run_commit};
pub use config::{ConfigEdit, ConfigStore, Configuration, ProviderConfig};
pub use error::{CommitError, ConfigError, GitError, ProviderError};
pub use git::{GitRunner, SystemGit};
pub use llm::{CommitProvider, GenerateRequest, ProviderRegistry};
