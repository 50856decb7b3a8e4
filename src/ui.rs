//! # UI Utilities
//!
//! Confirmation prompts and the coloured status lines shared across
//! commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use owo_colors::OwoColorize;

use crate::error::Error;

// =============================================================================
// Prompts
// =============================================================================

/// Asks the user yes/no questions.
pub trait Prompt {
    /// Returns `true` if the user agreed.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Prompts on the controlling terminal.
///
/// Uses an interactive dialog when stdin is a terminal, and otherwise reads
/// one line from stdin, accepting anything starting with `y`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            let answer = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .default(false)
                .interact_opt()
                .context("Failed to read confirmation")?;
            return Ok(answer.unwrap_or(false));
        }

        print!("{message} (y/n): ");
        io::stdout().flush().ok();

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read confirmation")?;
        Ok(is_yes(&line))
    }
}

/// Accepts `y`, `yes`, `Y ` and the like.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

/// Confirms or fails with [`Error::Cancelled`].
pub fn confirm_or_cancel(prompt: &mut dyn Prompt, message: &str) -> Result<()> {
    if prompt.confirm(message)? {
        Ok(())
    } else {
        Err(Error::Cancelled.into())
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an informational line, dimmed.
pub fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints a hint about how to make a choice permanent.
pub fn print_hint(message: &str) {
    eprintln!("{} {}", "hint:".cyan(), message);
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers and records the questions asked.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompt {
        answers: VecDeque<bool>,
        pub(crate) asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub(crate) fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&mut self, message: &str) -> Result<bool> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .context("Unexpected prompt")
        }
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  Yes "));
        assert!(is_yes("Y"));
        assert!(!is_yes("n\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("maybe"));
    }

    #[test]
    fn test_confirm_or_cancel() {
        let mut yes = ScriptedPrompt::answering(&[true]);
        assert!(confirm_or_cancel(&mut yes, "go?").is_ok());
        assert_eq!(yes.asked, vec!["go?"]);

        let mut no = ScriptedPrompt::answering(&[false]);
        let err = confirm_or_cancel(&mut no, "go?").unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Cancelled)));
    }
}
