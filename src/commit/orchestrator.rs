//! Commit command pipeline.
//!
//! Steps:
//! 1. Read the staged diff (nothing staged ends the run successfully)
//! 2. Resolve the model to the provider that lists it
//! 3. Generate a message with that provider
//! 4. Print it and ask for confirmation
//! 5. Commit on yes, leave the index untouched on no

use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::error::{CommitError, ConfigError};
use crate::git::GitRunner;
use crate::llm::{GenerateRequest, ProviderRegistry};

use super::confirm::Confirmer;
use super::message::has_conventional_prefix;

pub const CONFIRM_PROMPT: &str = "Do you want to commit with this message?";

/// Options for the commit command, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    pub model: Option<String>,
    pub style: Option<String>,
}

/// How a commit run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    NothingStaged,
    Declined { message: String },
    Committed { message: String },
}

/// Run the commit pipeline with every collaborator injected.
pub async fn run_commit(
    options: &CommitOptions,
    config: &Configuration,
    git: &dyn GitRunner,
    providers: &ProviderRegistry,
    confirmer: &dyn Confirmer,
) -> Result<CommitOutcome, CommitError> {
    let diff = git.staged_diff().map_err(CommitError::Diff)?;
    if diff.is_empty() {
        println!("No staged changes to commit.");
        return Ok(CommitOutcome::NothingStaged);
    }

    let model = config.effective_model(options.model.as_deref());
    let style = config.effective_style(options.style.as_deref());
    let provider_name = config.resolve_provider(model)?;
    let settings = config
        .provider(provider_name)
        .ok_or_else(|| ConfigError::ModelNotFound(model.to_string()))?;
    let provider = providers.get(provider_name)?;

    debug!(
        "Generating with provider={} model={} style={}",
        provider_name, model, style
    );

    let request = GenerateRequest::new(&diff, model, style).with_settings(settings);
    let message = provider.generate(&request, settings).await?;

    if !has_conventional_prefix(&message) {
        warn!("Generated message has no conventional commit prefix: {}", message);
    }

    println!("\nGenerated Commit Message:\n");
    println!("{}", message);
    println!();

    if !confirmer.confirm(CONFIRM_PROMPT)? {
        println!("Commit aborted by the user.");
        return Ok(CommitOutcome::Declined { message });
    }

    git.commit(&message)?;
    info!("Committed with message generated by {}", provider_name);

    Ok(CommitOutcome::Committed { message })
}
