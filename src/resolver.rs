//! # Executable Resolver
//!
//! Turns a bare command name or a path into a verified executable file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use crate::{constants::FALLBACK_BIN_DIRS, environment::Environment};

/// Any of the owner/group/other execute bits.
const EXECUTE_BITS: u32 = 0o111;

/// Resolves executables against an ordered directory list.
///
/// Search order is the process search path followed by the fallback
/// directories. The first match wins.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    search_path: Vec<PathBuf>,
    fallback_dirs: Vec<PathBuf>,
}

impl Resolver {
    pub const fn new(search_path: Vec<PathBuf>, fallback_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            fallback_dirs,
        }
    }

    /// Resolver over `$PATH` plus the standard binary directories.
    pub fn from_env(env: &Environment) -> Self {
        Self::new(
            env.search_path(),
            FALLBACK_BIN_DIRS.iter().map(PathBuf::from).collect(),
        )
    }

    /// Resolves `name` to an executable path, or `None` when nothing matches.
    ///
    /// A name containing a path separator is only checked directly. A bare
    /// name is checked in each search directory in order.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let direct = Path::new(name);
        if name.contains('/') {
            return is_executable(direct).then(|| direct.to_path_buf());
        }

        let found = self
            .directories()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate));

        tracing::debug!(name, found = ?found, "resolved executable");
        found
    }

    /// Resolves `name` on the search path only, skipping fallback directories.
    pub fn resolve_on_search_path(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }

    /// Resolves the first resolvable name from `candidates`.
    pub fn first_of(&self, candidates: &[&str]) -> Option<PathBuf> {
        candidates.iter().find_map(|name| self.resolve(name))
    }

    fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.search_path.iter().chain(&self.fallback_dirs)
    }
}

/// Whether `path` is a regular file with at least one execute bit set.
///
/// Symlinks are followed.
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| {
        meta.is_file() && meta.permissions().mode() & EXECUTE_BITS != 0
    })
}
