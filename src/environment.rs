//! # Environment
//!
//! Snapshot of the process environment, captured once at startup.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment values the launcher consults.
///
/// Identity values here are only used to suggest install locations;
/// permission decisions always use the real process credentials.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub path: Option<OsString>,
    pub home: Option<PathBuf>,
    pub user: Option<String>,
}

impl Environment {
    /// Captures the current process environment.
    pub fn capture() -> Self {
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            path: env::var_os("PATH"),
            home: env::var_os("HOME")
                .filter(|h| !h.is_empty())
                .map(PathBuf::from)
                .or_else(dirs::home_dir),
            user: non_empty("USER").or_else(|| non_empty("LOGNAME")),
        }
    }

    /// Directories from `$PATH`, in order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.path
            .as_deref()
            .map(|p| {
                env::split_paths(p)
                    .filter(|d| !d.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `dir` appears on `$PATH`.
    pub fn on_search_path(&self, dir: &Path) -> bool {
        self.search_path().iter().any(|d| d == dir)
    }

    /// User name, falling back to the last component of `$HOME`.
    pub fn user_name(&self) -> Option<String> {
        self.user.clone().or_else(|| {
            self.home
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
        })
    }
}
