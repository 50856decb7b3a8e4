//! # cedit
//!
//! Entry point: starts logging, loads the configuration, expands aliases,
//! parses arguments, and maps the outcome to an exit code. An unreadable
//! configuration only stops the actions that read it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, ffi::OsString, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use cedit::{
    cli::{self, Cli, ConfigUse},
    commands::{self, Context},
    config,
    constants::{EXIT_CANCELLED, LOG_ENV_VAR},
    environment::Environment,
    error::exit_code_for,
    ui::{self, TerminalPrompt},
    Config,
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let code = exit_code_for(&err);
            if code == EXIT_CANCELLED {
                eprintln!("{}", "Cancelled.".yellow());
            } else {
                eprintln!("{} {err:#}", "error:".red().bold());
            }
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<u8> {
    let args: Vec<OsString> = env::args_os().collect();
    init_logging(cli::debug_requested(&args));

    let loaded = Config::load();
    let argv = match &loaded {
        Ok(config) => cli::expand_aliases(args, config),
        Err(_) => args,
    };

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = u8::from(e.use_stderr());
            e.print()?;
            return Ok(code);
        }
    };

    let action = cli.into_action();
    let config = match (loaded, action.config_use()) {
        (Ok(config), _) => config,
        (Err(err), ConfigUse::Unused) => {
            tracing::debug!(error = %err, "ignoring unreadable config");
            Config::empty(config::default_path())
        }
        (Err(err), ConfigUse::Rewrites) => {
            let err = anyhow::Error::from(err);
            ui::print_warnings(&[format!("{err:#}; it will be replaced by the new setting")]);
            Config::empty(config::default_path())
        }
        (Err(err), ConfigUse::Reads) => return Err(err.into()),
    };
    tracing::debug!(config = %config.path().display(), "starting");

    let mut prompt = TerminalPrompt;
    let mut ctx = Context::new(config, Environment::capture(), &mut prompt);
    commands::dispatch(action, &mut ctx)
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
