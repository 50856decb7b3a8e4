//! # Errors
//!
//! Failure kinds that the top-level dispatcher maps to exit codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use crate::constants::EXIT_CANCELLED;

/// Which external tool could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Editor,
    RootEditor,
    ElevationCommand,
}

impl Tool {
    /// Option key that configures this tool.
    pub const fn option(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::RootEditor => "rooteditor",
            Self::ElevationCommand => "elevcmd",
        }
    }

    /// Human readable name.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::RootEditor => "root editor",
            Self::ElevationCommand => "elevation command",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a valid option: {name} (expecting one of: {})", .expected.join(", "))]
    InvalidOption {
        name: String,
        expected: &'static [&'static str],
    },

    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "cannot find {}: {value}\nSet a valid one with: cedit --set {}=PATH",
        .tool.describe(),
        .tool.option()
    )]
    ToolNotFound { tool: Tool, value: String },

    #[error(
        "no common {}s found\nSet one with: cedit --set {}=PATH",
        .tool.describe(),
        .tool.option()
    )]
    NoDefaultTool { tool: Tool },

    #[error("cancelled")]
    Cancelled,

    #[error("unable to run command: {command}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("cedit already seems to be installed at: {}\nRemove it first if you want to re-install.", .0.display())]
    AlreadyInstalled(PathBuf),

    #[error("not a directory: {}\nCreate the directory and make sure it is on your PATH.", .0.display())]
    NotADirectory(PathBuf),

    #[error("cedit is not installed as a symlink on the search path")]
    NotInstalled,

    #[error("refusing to remove {}: not a symlink", .0.display())]
    NotASymlink(PathBuf),

    #[error("{action} failed for {}\nTry again with elevated privileges, e.g.: sudo cedit {hint}", .path.display())]
    Install {
        action: &'static str,
        path: PathBuf,
        hint: &'static str,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => EXIT_CANCELLED,
            _ => 1,
        }
    }
}

/// Maps any error chain to an exit code, honouring typed kinds anywhere in the chain.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(1, Error::exit_code)
}
