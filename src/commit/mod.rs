//! The commit command: diff, generate, confirm, commit.

pub mod confirm;
pub mod message;
pub mod orchestrator;

pub use confirm::{Confirmer, TerminalConfirmer};
pub use message::has_conventional_prefix;
pub use orchestrator::{CommitOptions, CommitOutcome, run_commit};
