//! # Target Paths
//!
//! User-supplied paths, with optional `:LINE[:COLUMN]` suffixes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

/// A path to open, as typed and as resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub raw: String,
    pub path: PathBuf,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Target {
    /// Builds a target from a command-line argument.
    ///
    /// The literal name wins when it exists, so files with colons in their
    /// names still open. Otherwise a trailing `:LINE[:COLUMN]` is split off.
    /// Relative names missing from the working directory are looked up in
    /// `search_dirs`, first match wins.
    pub fn from_arg(raw: &str, search_dirs: &[PathBuf]) -> Self {
        if let Some(path) = locate(Path::new(raw), search_dirs) {
            return Self::plain(raw, path);
        }

        if let Some((name, line, column)) = split_position(raw) {
            let path = locate(Path::new(name), search_dirs).unwrap_or_else(|| PathBuf::from(name));
            return Self {
                raw: raw.to_string(),
                path,
                line: Some(line),
                column,
            };
        }

        Self::plain(raw, PathBuf::from(raw))
    }

    fn plain(raw: &str, path: PathBuf) -> Self {
        Self {
            raw: raw.to_string(),
            path,
            line: None,
            column: None,
        }
    }

    /// Whether the resolved path exists (dangling symlinks count).
    pub fn exists(&self) -> bool {
        self.path.symlink_metadata().is_ok()
    }
}

fn locate(name: &Path, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.symlink_metadata().is_ok() {
        return Some(name.to_path_buf());
    }
    if name.is_absolute() {
        return None;
    }
    search_dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.symlink_metadata().is_ok())
}

/// Splits `name:LINE` or `name:LINE:COLUMN`.
fn split_position(raw: &str) -> Option<(&str, u32, Option<u32>)> {
    let (rest, last) = raw.rsplit_once(':')?;
    let last: u32 = last.parse().ok()?;

    if let Some((name, line)) = rest.rsplit_once(':') {
        if let Ok(line) = line.parse::<u32>() {
            return (!name.is_empty()).then_some((name, line, Some(last)));
        }
    }
    (!rest.is_empty()).then_some((rest, last, None))
}
