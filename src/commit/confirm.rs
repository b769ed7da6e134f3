//! Yes/no confirmation before committing.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;
use tracing::debug;

use crate::error::CommitError;

/// Asks the user whether to go ahead.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, CommitError>;
}

/// Interactive terminal prompt. Defaults to "no" on a bare Enter.
///
/// When stdin is not a terminal (e.g. `echo y | gitllm commit`), one line is
/// read from it instead.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, CommitError> {
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal, reading answer as a line");
            return read_answer(prompt, io::stdin().lock(), io::stdout());
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| CommitError::Prompt(e.to_string()))
    }
}

/// Only `y` (any case, surrounding whitespace ignored) means yes.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Write `prompt (y/n): ` and read one line. End of input counts as "no".
pub fn read_answer(
    prompt: &str,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<bool, CommitError> {
    write!(output, "{} (y/n): ", prompt)
        .and_then(|_| output.flush())
        .map_err(|e| CommitError::Prompt(e.to_string()))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CommitError::Prompt(e.to_string()))?;

    Ok(is_yes(&line))
}
