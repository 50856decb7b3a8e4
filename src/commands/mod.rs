//! # Commands
//!
//! One module per user-facing command, plus the dispatcher.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod alias;
mod info;
mod install;
mod open;
mod settings;

use anyhow::Result;

use crate::{
    cli::Action,
    config::Config,
    environment::Environment,
    error::Tool,
    permissions::{Classifier, Credentials, ProcessCredentials},
    resolver::Resolver,
    ui::Prompt,
};

pub use alias::{execute as alias, AliasArgs};
pub use info::{about, completions};
pub use install::{install, remove};
pub use open::{execute as open, plan as plan_open, LaunchPlan, OpenArgs};
pub use settings::{list, set, set_program};

/// Everything a command needs, loaded once per invocation.
pub struct Context<'a, C = ProcessCredentials> {
    pub config: Config,
    pub env: Environment,
    pub resolver: Resolver,
    pub classifier: Classifier<C>,
    pub prompt: &'a mut dyn Prompt,
}

impl<'a> Context<'a, ProcessCredentials> {
    /// Context for the running process.
    pub fn new(config: Config, env: Environment, prompt: &'a mut dyn Prompt) -> Self {
        let resolver = Resolver::from_env(&env);
        Self {
            config,
            env,
            resolver,
            classifier: Classifier::current(),
            prompt,
        }
    }
}

/// Runs `action`, returning the process exit code.
pub fn dispatch<C: Credentials>(action: Action, ctx: &mut Context<'_, C>) -> Result<u8> {
    match action {
        Action::Open(args) => return open(&args, ctx),
        Action::List => list(&ctx.config),
        Action::Set(assignment) => set(&assignment, ctx)?,
        Action::SetEditor(value) => set_program(Tool::Editor, &value, ctx)?,
        Action::SetElevcmd(value) => set_program(Tool::ElevationCommand, &value, ctx)?,
        Action::Install(target) => install(&target, ctx)?,
        Action::Remove => remove(ctx)?,
        Action::About => about(),
        Action::Completions(shell) => completions(shell),
        Action::Alias(args) => alias(&args, ctx)?,
    }
    Ok(0)
}
