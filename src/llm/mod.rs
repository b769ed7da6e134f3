//! LLM providers that turn a staged diff into a commit message.

pub mod anthropic;
pub mod http;
pub mod openai;
pub mod prompt;
pub mod provider;

pub use anthropic::AnthropicProvider;
pub use http::build_client;
pub use openai::OpenAiProvider;
pub use prompt::{COMMIT_PREFIXES, build_system_prompt};
pub use provider::{CommitProvider, DEFAULT_MAX_TOKENS, GenerateRequest, ProviderRegistry};
