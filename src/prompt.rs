use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use console::style;

/// Seam for the interactive inputs, so tests can script the operator.
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Reads a secret without echoing it to the terminal.
    fn password(&mut self, prompt: &str) -> Result<String>;

    /// Shows `warning` and asks whether to proceed. Anything but an
    /// affirmative answer means the operator cancelled.
    fn confirm(&mut self, warning: &str) -> Result<bool>;
}

/// Only an exact "y", in either case, counts as consent to a
/// destructive action.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prompts on the controlling terminal.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("failed to read {}", prompt))
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .with_context(|| format!("failed to read {}", prompt))
    }

    fn confirm(&mut self, warning: &str) -> Result<bool> {
        // dialoguer's Confirm re-prompts on unrecognized keys; this flow
        // must treat any answer other than y/Y as a cancellation.
        render_confirmation(&mut io::stdout().lock(), warning)?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

// The warning and the question share one stream so they cannot be
// reordered or split by redirection.
fn render_confirmation(out: &mut dyn Write, warning: &str) -> io::Result<()> {
    writeln!(out, "{}", style(warning).red().bold())?;
    write!(out, "Continue? [y/N]: ")?;
    out.flush()
}
