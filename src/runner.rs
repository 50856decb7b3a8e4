//! # Process Runner
//!
//! Launches the assembled command.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io,
    process::{Command, ExitStatus},
};

use crate::{command::ResolvedCommand, error::Error};

/// How to hand the terminal over to the child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaunchMode {
    /// Spawn and return immediately.
    #[default]
    Detach,
    /// Block until the child exits and report its exit code.
    Wait,
}

/// What happened after launching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The child is running on its own.
    Spawned { pid: u32 },
    /// The child ran to completion.
    Exited { code: i32 },
}

impl Outcome {
    /// Exit code the launcher should report.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Spawned { .. } => 0,
            Self::Exited { code } => u8::try_from(code).unwrap_or(1),
        }
    }
}

/// Runs `command`.
///
/// Direct argv spawning is preferred. If the spawn fails for a reason other
/// than a missing or non-executable program, the command is retried through
/// `sh -c`, which blocks until the child exits.
pub fn run(command: &ResolvedCommand, mode: LaunchMode) -> Result<Outcome, Error> {
    tracing::debug!(command = %command, ?mode, "launching");

    let mut child = match Command::new(command.program()).args(command.args()).spawn() {
        Ok(child) => child,
        Err(e) if is_fatal(&e) => return Err(launch_error(command, e)),
        Err(e) => {
            tracing::debug!(error = %e, "direct spawn failed, falling back to shell");
            return run_shell(command);
        }
    };

    match mode {
        LaunchMode::Detach => Ok(Outcome::Spawned { pid: child.id() }),
        LaunchMode::Wait => {
            let status = child.wait().map_err(|e| launch_error(command, e))?;
            Ok(exited(status))
        }
    }
}

fn run_shell(command: &ResolvedCommand) -> Result<Outcome, Error> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command.to_shell_line())
        .status()
        .map_err(|e| launch_error(command, e))?;
    Ok(exited(status))
}

fn is_fatal(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

fn exited(status: ExitStatus) -> Outcome {
    // Killed by a signal
    let code = status.code().unwrap_or(1);
    Outcome::Exited { code }
}

fn launch_error(command: &ResolvedCommand, source: io::Error) -> Error {
    Error::Launch {
        command: command.to_shell_line(),
        source,
    }
}
