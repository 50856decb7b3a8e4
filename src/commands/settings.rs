//! # Settings Commands
//!
//! Lists and changes the persistent options.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;

use super::Context;
use crate::{
    config::{Change, Config, SETTABLE_OPTIONS},
    constants::APP_NAME,
    editor::Program,
    error::{Error, Tool},
    permissions::Credentials,
    ui,
};

/// Executes the list command.
pub fn list(config: &Config) {
    let options = config.list();
    let aliases: Vec<_> = config.aliases().collect();

    if options.is_empty() && aliases.is_empty() {
        println!("{}", "No settings yet.".dimmed());
        println!("Use '{APP_NAME} --editor' or '{APP_NAME} --elevcmd' to set your favorites.");
        return;
    }

    println!("{}", "Current settings:".bold());
    for (key, value) in options {
        println!("    {key} : {value}");
    }
    for (name, args) in aliases {
        println!("    alias {name} : {}", shell_words(args));
    }
}

/// Executes `--set OPTION=VALUE`. An empty value clears the option.
pub fn set<C: Credentials>(assignment: &str, ctx: &mut Context<'_, C>) -> Result<()> {
    let (key, value) = assignment
        .split_once('=')
        .with_context(|| format!("Expected OPTION=VALUE, got '{assignment}'"))?;
    let key = key.trim().to_lowercase();
    let value = value.trim();

    if !SETTABLE_OPTIONS.contains(&key.as_str()) {
        return Err(Error::InvalidOption {
            name: key,
            expected: SETTABLE_OPTIONS,
        }
        .into());
    }

    if !value.is_empty() {
        if let Some(tool) = tool_for(&key) {
            if let Err(e) = Program::parse(value, &ctx.resolver, tool) {
                ui::print_warnings(&[e.to_string()]);
            }
        }
    }

    save(&mut ctx.config, &key, value)
}

/// Executes `--editor` / `--elevcmd`: validates the program, then saves it.
pub fn set_program<C: Credentials>(tool: Tool, value: &str, ctx: &mut Context<'_, C>) -> Result<()> {
    let value = value.trim();
    let program = Program::parse(value, &ctx.resolver, tool)?;
    tracing::debug!(option = tool.option(), path = %program.path.display(), "validated");

    save(&mut ctx.config, tool.option(), value)
}

fn save(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let change = config.set_and_save(key, value)?;

    match (change, value.is_empty()) {
        (Change::Saved, false) => ui::print_success(&format!("Set {key} to {value}")),
        (Change::Saved, true) => ui::print_success(&format!("Cleared {key}")),
        (Change::Unchanged, false) => ui::print_info(&format!("{key} already set to {value}")),
        (Change::Unchanged, true) => ui::print_info(&format!("{key} is not set")),
    }
    Ok(())
}

fn tool_for(key: &str) -> Option<Tool> {
    match key {
        "editor" => Some(Tool::Editor),
        "rooteditor" => Some(Tool::RootEditor),
        "elevcmd" => Some(Tool::ElevationCommand),
        _ => None,
    }
}

fn shell_words(args: &[String]) -> String {
    shlex::try_join(args.iter().map(String::as_str)).unwrap_or_else(|_| args.join(" "))
}
