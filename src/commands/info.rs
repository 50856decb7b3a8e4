//! # Informational Commands
//!
//! `--about` and `--completions`; neither has side effects.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;
use owo_colors::OwoColorize;

use crate::{
    cli::Cli,
    constants::{ABOUT, APP_NAME, VERSION},
};

/// Prints the long description.
pub fn about() {
    println!("{} v{}\n", APP_NAME.bold(), VERSION);
    println!("{ABOUT}");
}

/// Prints a completion script for `shell`.
pub fn completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), APP_NAME, &mut io::stdout());
}
