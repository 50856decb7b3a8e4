//! # Command-Line Interface
//!
//! Argument definitions, alias expansion, and the mapping from flags to
//! actions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{ffi::OsString, path::PathBuf};

use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    commands::{AliasArgs, OpenArgs},
    config::Config,
    installer::InstallTarget,
};

/// Name of the alias subcommand, which cannot itself be an alias.
pub const ALIAS_COMMAND: &str = "alias";

/// Open files in your favorite editor, elevating only when needed.
#[derive(Debug, Parser)]
#[command(
    name = "cedit",
    version,
    about,
    args_conflicts_with_subcommands = true,
    after_help = "Examples:\n  \
        cedit myfile.txt          open myfile.txt, elevating if needed\n  \
        cedit src/main.rs:42      open at line 42\n  \
        cedit --editor gedit      set your favorite editor\n  \
        cedit --elevcmd kdesudo   set your favorite elevation command\n  \
        cedit notes.txt -- -n     pass -n through to the editor"
)]
#[command(group(
    ArgGroup::new("action")
        .args(["list", "set", "editor", "elevcmd", "install", "remove", "about", "completions"])
))]
pub struct Cli {
    /// Files to open, optionally suffixed with :LINE[:COLUMN]
    #[arg(value_name = "PATH", conflicts_with = "action")]
    pub paths: Vec<String>,

    /// Extra arguments passed through to the editor
    #[arg(last = true, value_name = "EDITOR_ARGS")]
    pub editor_args: Vec<String>,

    /// List all current settings
    #[arg(short, long)]
    pub list: bool,

    /// Set an option (editor, elevcmd, rooteditor, paths); an empty value clears it
    #[arg(short, long, value_name = "OPTION=VALUE")]
    pub set: Option<String>,

    /// Set your favorite editor
    #[arg(short, long, value_name = "PATH")]
    pub editor: Option<String>,

    /// Set your favorite elevation command
    #[arg(long, value_name = "PATH")]
    pub elevcmd: Option<String>,

    /// Install a symlink to this executable in a bin directory
    #[arg(short, long)]
    pub install: bool,

    /// Install into a bin directory under your home
    #[arg(short, long, requires = "install")]
    pub user: bool,

    /// Install into this directory
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        requires = "install",
        conflicts_with = "user"
    )]
    pub install_dir: Option<PathBuf>,

    /// Remove the installed symlink
    #[arg(short, long)]
    pub remove: bool,

    /// Show a longer description of cedit
    #[arg(short, long)]
    pub about: bool,

    /// Wait for the editor to exit and return its exit code unchanged
    #[arg(short, long, long_help = "Wait for the editor to exit and return its exit code unchanged.\n\
        Without --wait, exit code 2 always means a prompt was declined; with it,\n\
        the editor may exit with 2 as well.")]
    pub wait: bool,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Print a shell completion script
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a named argument list, usable in place of the first path
    Alias(AliasCli),
}

#[derive(Debug, Args)]
pub struct AliasCli {
    /// Alias name; lists all aliases when omitted
    pub name: Option<String>,

    /// Arguments to save under the name
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Delete the alias instead
    #[arg(long, requires = "name", conflicts_with = "args")]
    pub delete: bool,
}

/// What the invocation asks for.
#[derive(Debug)]
pub enum Action {
    Open(OpenArgs),
    List,
    Set(String),
    SetEditor(String),
    SetElevcmd(String),
    Install(InstallTarget),
    Remove,
    About,
    Completions(Shell),
    Alias(AliasArgs),
}

/// How an action depends on the stored configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigUse {
    /// Never touches it.
    Unused,
    /// Reads it; an unreadable file is fatal.
    Reads,
    /// Writes a single option; an unreadable file is replaced.
    Rewrites,
}

impl Action {
    /// How this action uses the configuration file.
    pub const fn config_use(&self) -> ConfigUse {
        match self {
            Self::About | Self::Completions(_) | Self::Install(_) | Self::Remove => ConfigUse::Unused,
            Self::Set(_) | Self::SetEditor(_) | Self::SetElevcmd(_) => ConfigUse::Rewrites,
            Self::Open(_) | Self::List | Self::Alias(_) => ConfigUse::Reads,
        }
    }
}

impl Cli {
    /// Resolves the parsed flags into a single action.
    pub fn into_action(self) -> Action {
        if let Some(Command::Alias(alias)) = self.command {
            return Action::Alias(AliasArgs {
                name: alias.name,
                args: alias.args,
                delete: alias.delete,
            });
        }

        if self.list {
            Action::List
        } else if let Some(assignment) = self.set {
            Action::Set(assignment)
        } else if let Some(editor) = self.editor {
            Action::SetEditor(editor)
        } else if let Some(elevcmd) = self.elevcmd {
            Action::SetElevcmd(elevcmd)
        } else if self.install {
            let target = match (self.user, self.install_dir) {
                (_, Some(dir)) => InstallTarget::Dir(dir),
                (true, None) => InstallTarget::User,
                (false, None) => InstallTarget::Auto,
            };
            Action::Install(target)
        } else if self.remove {
            Action::Remove
        } else if self.about {
            Action::About
        } else if let Some(shell) = self.completions {
            Action::Completions(shell)
        } else {
            Action::Open(OpenArgs {
                paths: self.paths,
                editor_args: self.editor_args,
                wait: self.wait,
            })
        }
    }
}

/// Short flags that take no value and may precede an alias name.
const LEADING_SWITCHES: &[char] = &['w', 'd'];

/// Whether `token` is one of the switches allowed before an alias name,
/// alone (`-w`, `--debug`) or bundled (`-wd`).
fn is_leading_switch(token: &str) -> bool {
    match token.strip_prefix("--") {
        Some(long) => matches!(long, "wait" | "debug"),
        None => token
            .strip_prefix('-')
            .is_some_and(|short| {
            !short.is_empty() && short.chars().all(|c| LEADING_SWITCHES.contains(&c))
        }),
    }
}

/// Whether `--debug` was given, checked before the arguments are parsed so
/// logging is up before the configuration loads.
pub fn debug_requested(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .filter_map(|a| a.to_str())
        .take_while(|a| *a != "--")
        .any(|a| {
            a == "--debug" || (!a.starts_with("--") && is_leading_switch(a) && a.contains('d'))
        })
}

/// Replaces the first positional argument with an alias's saved arguments.
///
/// Only `-w`/`-d` style switches may come before the alias name. Runs once,
/// before parsing; the saved arguments are not expanded again. Everything
/// around the alias name keeps its place.
pub fn expand_aliases(args: Vec<OsString>, config: &Config) -> Vec<OsString> {
    let position = args
        .iter()
        .skip(1)
        .position(|a| !a.to_str().is_some_and(is_leading_switch))
        .map(|i| i + 1);

    let saved = position.and_then(|i| {
        let first = args[i].to_str()?;
        if first.starts_with('-') || first == ALIAS_COMMAND {
            return None;
        }
        config.alias(first)
    });
    let (Some(index), Some(saved)) = (position, saved) else {
        return args;
    };

    tracing::debug!(alias = ?args[index], ?saved, "expanding alias");
    let mut expanded = Vec::with_capacity(args.len() + saved.len());
    expanded.extend(args[..index].iter().cloned());
    expanded.extend(saved.iter().map(OsString::from));
    expanded.extend(args[index + 1..].iter().cloned());
    expanded
}
