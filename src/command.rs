//! # Command Builder
//!
//! Assembles the argument vector for the child process.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::PathBuf,
};

use crate::editor::Program;

/// Final argv for the child process.
///
/// Layout: `[elevation] [elevation args] editor [editor args] [extra args] paths...`.
/// When elevation is used its executable is at position 0; the editor
/// always follows the elevation prefix directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    argv: Vec<OsString>,
    elevated: bool,
}

impl ResolvedCommand {
    /// Builds the command. With `elevation` set, the whole batch runs as a
    /// single elevated process.
    pub fn build(
        editor: &Program,
        elevation: Option<&Program>,
        extra_args: &[String],
        paths: &[PathBuf],
    ) -> Self {
        let mut argv: Vec<OsString> = Vec::new();

        if let Some(elevation) = elevation {
            argv.push(elevation.path.clone().into_os_string());
            argv.extend(elevation.args.iter().map(OsString::from));
        }

        argv.push(editor.path.clone().into_os_string());
        argv.extend(editor.args.iter().map(OsString::from));
        argv.extend(extra_args.iter().map(OsString::from));
        argv.extend(paths.iter().map(|p| p.clone().into_os_string()));

        Self {
            argv,
            elevated: elevation.is_some(),
        }
    }

    /// Executable to launch.
    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    pub const fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Quotes the argv into a single shell command line.
    ///
    /// Only used for display and the blocking shell fallback.
    pub fn to_shell_line(&self) -> String {
        let parts: Vec<String> = self
            .argv
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_line())
    }
}
