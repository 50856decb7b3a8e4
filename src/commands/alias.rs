//! # Alias Command
//!
//! Saves named argument lists that stand in for the first path.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use super::Context;
use crate::{
    cli::ALIAS_COMMAND,
    config::Change,
    permissions::Credentials,
    ui,
};

/// Arguments for the alias command
#[derive(Debug, Clone, Default)]
pub struct AliasArgs {
    pub name: Option<String>,
    pub args: Vec<String>,
    pub delete: bool,
}

/// Executes the alias command.
///
/// - no name: list aliases
/// - name only: show one alias
/// - name and arguments: save, confirming before overwriting
/// - `--delete`: remove
pub fn execute<C: Credentials>(args: &AliasArgs, ctx: &mut Context<'_, C>) -> Result<()> {
    let Some(name) = args.name.as_deref() else {
        list(ctx);
        return Ok(());
    };

    if args.delete {
        if ctx.config.remove_alias(name)? == Change::Unchanged {
            bail!("No alias named '{name}'");
        }
        ui::print_success(&format!("Removed alias {name}"));
        return Ok(());
    }

    if args.args.is_empty() {
        let Some(saved) = ctx.config.alias(name) else {
            bail!("No alias named '{name}'");
        };
        println!("{name} : {}", saved.join(" "));
        return Ok(());
    }

    validate_name(name)?;

    if let Some(existing) = ctx.config.alias(name) {
        if existing != args.args.as_slice() {
            let message = format!(
                "Alias '{name}' already exists ({}). Overwrite it?",
                existing.join(" ")
            );
            ui::confirm_or_cancel(&mut *ctx.prompt, &message)?;
        }
    }

    match ctx.config.set_alias(name, &args.args)? {
        Change::Saved => ui::print_success(&format!("Saved alias {name}")),
        Change::Unchanged => ui::print_info(&format!("Alias {name} already saved")),
    }
    Ok(())
}

fn list<C: Credentials>(ctx: &Context<'_, C>) {
    let aliases: Vec<_> = ctx.config.aliases().collect();
    if aliases.is_empty() {
        println!("{}", "No aliases yet.".dimmed());
        return;
    }
    for (name, saved) in aliases {
        println!("{name} : {}", saved.join(" "));
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('-') {
        bail!("Alias names cannot be empty or start with '-'");
    }
    if name.eq_ignore_ascii_case(ALIAS_COMMAND) {
        bail!("'{ALIAS_COMMAND}' is reserved");
    }
    if name.contains(|c: char| c.is_whitespace() || c == '/') {
        bail!("Alias names cannot contain whitespace or '/'");
    }
    Ok(())
}
