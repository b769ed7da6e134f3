//! Git integration: reading the staged diff and creating the commit.

pub mod diff;
pub mod executor;

pub use executor::{GitRunner, SystemGit, check_git_installed};
