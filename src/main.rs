//! gitllm - CLI entry point.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitllm::commit::{CommitOptions, TerminalConfirmer, run_commit};
use gitllm::config::{ConfigEdit, ConfigStore};
use gitllm::git::{SystemGit, check_git_installed};
use gitllm::llm::{ProviderRegistry, build_client};

/// Environment variable holding the tracing filter.
const LOG_ENV_VAR: &str = "GITLLM_LOG";

/// AI-powered Git commit message generator.
#[derive(Parser, Debug)]
#[command(name = "gitllm")]
#[command(about = "AI-powered Git commit message generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an AI-powered commit message for the staged changes
    Commit(CommitArgs),

    /// Update .gitllm/config.yml
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct CommitArgs {
    /// Model to use (defaults to defaultModel from the config file)
    #[arg(long)]
    model: Option<String>,

    /// Commit message style (e.g. concise, detailed)
    #[arg(long)]
    style: Option<String>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Add a model to a provider (--provider, default openai)
    #[arg(long)]
    model: Option<String>,

    /// API key for --provider
    #[arg(long = "apiKey", visible_alias = "api-key")]
    api_key: Option<String>,

    /// Provider to create or update
    #[arg(long)]
    provider: Option<String>,

    /// Base URL for --provider
    #[arg(long = "baseUrl", visible_alias = "base-url")]
    base_url: Option<String>,

    /// Model used when commit runs without --model
    #[arg(long = "defaultModel", visible_alias = "default-model")]
    default_model: Option<String>,
}

impl From<ConfigArgs> for ConfigEdit {
    fn from(args: ConfigArgs) -> Self {
        ConfigEdit {
            model: args.model,
            api_key: args.api_key,
            provider: args.provider,
            base_url: args.base_url,
            default_model: args.default_model,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let store = ConfigStore::in_current_dir().context("Failed to locate configuration")?;

    match cli.command {
        Commands::Commit(args) => commit(args, &store).await,
        Commands::Config(args) => config(args, &store),
    }
}

async fn commit(args: CommitArgs, store: &ConfigStore) -> Result<()> {
    check_git_installed()?;

    let config = store.load().context("Failed to load configuration")?;
    let client = build_client()?;
    let providers = ProviderRegistry::builtin(client);

    let options = CommitOptions {
        model: args.model,
        style: args.style,
    };

    run_commit(&options, &config, &SystemGit::new(), &providers, &TerminalConfirmer).await?;

    Ok(())
}

fn config(args: ConfigArgs, store: &ConfigStore) -> Result<()> {
    let mut config = store.load().context("Failed to load configuration")?;

    let edit = ConfigEdit::from(args);
    if edit.is_empty() {
        println!(
            "Nothing to change. Configuration is at {}",
            store.path().display()
        );
        return Ok(());
    }

    edit.apply(&mut config)?;

    store.save(&config).context("Failed to save configuration")?;
    println!("Configuration saved at {}", store.path().display());

    Ok(())
}
