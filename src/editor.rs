//! # Editor Discovery
//!
//! Picks the editor and elevation command for a launch.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    constants::{DEFAULT_EDITORS, DEFAULT_ELEVATION_COMMANDS},
    error::{Error, Tool},
    resolver::Resolver,
};

/// A resolved executable with its saved arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub path: PathBuf,
    pub args: Vec<String>,
}

impl Program {
    /// Parses a command line such as `nvim -c ":normal G"` and resolves its
    /// program.
    pub fn parse(command_line: &str, resolver: &Resolver, tool: Tool) -> Result<Self, Error> {
        let not_found = || Error::ToolNotFound {
            tool,
            value: command_line.to_string(),
        };

        // Proper shell quoting keeps quoted arguments together
        let parts = shlex::split(command_line).ok_or_else(not_found)?;
        let (program, args) = parts.split_first().ok_or_else(not_found)?;
        let path = resolver.resolve(program).ok_or_else(not_found)?;

        Ok(Self {
            path,
            args: args.to_vec(),
        })
    }

    /// Program without saved arguments.
    pub const fn bare(path: PathBuf) -> Self {
        Self {
            path,
            args: Vec::new(),
        }
    }
}

/// Where a selected program came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Set in the configuration file.
    Configured,
    /// First match from the built-in list.
    Default,
}

/// A program together with the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub program: Program,
    pub source: Source,
}

/// Selects the editor: the `editor` setting, then the first installed
/// editor from the default list.
///
/// A configured editor that cannot be found is an error rather than a
/// silent fallback. `$VISUAL` and `$EDITOR` are not consulted.
pub fn editor(config: &Config, resolver: &Resolver) -> Result<Selection, Error> {
    if let Some(configured) = config.editor() {
        return configured_selection(configured, resolver, Tool::Editor);
    }
    default_selection(DEFAULT_EDITORS, resolver, Tool::Editor)
}

/// Selects the editor used for elevated launches, when one is configured.
pub fn root_editor(config: &Config, resolver: &Resolver) -> Result<Option<Selection>, Error> {
    config
        .rooteditor()
        .map(|configured| configured_selection(configured, resolver, Tool::RootEditor))
        .transpose()
}

/// Selects the elevation command: the `elevcmd` setting, then the first
/// installed command from the default list.
pub fn elevation_command(config: &Config, resolver: &Resolver) -> Result<Selection, Error> {
    if let Some(configured) = config.elevcmd() {
        return configured_selection(configured, resolver, Tool::ElevationCommand);
    }
    default_selection(DEFAULT_ELEVATION_COMMANDS, resolver, Tool::ElevationCommand)
}

fn configured_selection(value: &str, resolver: &Resolver, tool: Tool) -> Result<Selection, Error> {
    Ok(Selection {
        program: Program::parse(value, resolver, tool)?,
        source: Source::Configured,
    })
}

fn default_selection(candidates: &[&str], resolver: &Resolver, tool: Tool) -> Result<Selection, Error> {
    let path = resolver
        .first_of(candidates)
        .ok_or(Error::NoDefaultTool { tool })?;
    tracing::debug!(tool = tool.describe(), path = %path.display(), "using default");

    Ok(Selection {
        program: Program::bare(path),
        source: Source::Default,
    })
}

// =============================================================================
// Line Positioning
// =============================================================================

/// How an editor accepts a starting line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// `+LINE` before the file (vi family, nano, emacs, micro, gedit).
    /// Columns are dropped.
    Plus,
    /// `--line LINE --column COL` (kate, kwrite).
    Kate,
    /// No known convention; positions are dropped.
    Unsupported,
}

impl LineStyle {
    /// Convention for the editor binary at `path`.
    pub fn for_editor(path: &Path) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        match name {
            "vi" | "vim" | "nvim" | "gvim" | "view" | "nano" | "pico" | "emacs" | "micro"
            | "gedit" | "joe" | "mg" => Self::Plus,
            "kate" | "kwrite" => Self::Kate,
            _ => Self::Unsupported,
        }
    }

    /// Arguments that position the cursor.
    pub fn args(self, line: u32, column: Option<u32>) -> Vec<String> {
        match self {
            Self::Plus => vec![format!("+{line}")],
            Self::Kate => {
                let mut args = vec!["--line".to_string(), line.to_string()];
                if let Some(col) = column {
                    args.extend(["--column".to_string(), col.to_string()]);
                }
                args
            }
            Self::Unsupported => Vec::new(),
        }
    }
}
