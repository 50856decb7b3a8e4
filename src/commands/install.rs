//! # Install Commands
//!
//! Installs or removes the `cedit` symlink, always after confirmation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, fs};

use anyhow::{Context as _, Result};

use super::Context;
use crate::{
    constants::APP_NAME,
    installer::{self, InstallTarget},
    permissions::Credentials,
    ui,
};

/// Executes `--install`.
pub fn install<C: Credentials>(target: &InstallTarget, ctx: &mut Context<'_, C>) -> Result<()> {
    let exe = env::current_exe()
        .and_then(fs::canonicalize)
        .context("Unable to locate the running executable")?;

    let plan = installer::plan_install(&exe, target, &ctx.env, &ctx.resolver)?;
    if *target == InstallTarget::User {
        if let Some(user) = ctx.env.user_name() {
            ui::print_info(&format!("Installing for user {user}"));
        }
    }

    ui::confirm_or_cancel(
        &mut *ctx.prompt,
        &format!(
            "Create symlink {} -> {}?",
            plan.link.display(),
            plan.source.display()
        ),
    )?;

    installer::install(&plan)?;
    ui::print_success(&format!("Installed {}", plan.link.display()));
    ui::print_info(&format!(
        "You may have to restart your terminal to use the command '{APP_NAME}'."
    ));
    Ok(())
}

/// Executes `--remove`.
pub fn remove<C: Credentials>(ctx: &mut Context<'_, C>) -> Result<()> {
    let link = installer::find_installed(&ctx.resolver)?;

    ui::confirm_or_cancel(
        &mut *ctx.prompt,
        &format!("Remove symlink {}?", link.display()),
    )?;

    installer::uninstall(&link)?;
    ui::print_success(&format!("Removed {}", link.display()));
    Ok(())
}
