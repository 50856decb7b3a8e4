//! # Configuration
//!
//! Persistent option store kept in `cedit.toml` next to the executable.
//!
//! Options are flat string values under top-level keys. Aliases live in an
//! `aliases` table mapping a name to its saved argument list. Every mutation
//! is flushed immediately through an atomic temp-file rename, so a failed
//! write never clobbers the previous settings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::BTreeMap,
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME},
    error::Error,
};

/// Option keys accepted by `--set`.
pub const SETTABLE_OPTIONS: &[&str] = &["editor", "elevcmd", "rooteditor", "paths"];

/// Result of a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The file was rewritten.
    Saved,
    /// The stored value already matched; nothing was written.
    Unchanged,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(flatten)]
    options: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    aliases: BTreeMap<String, Vec<String>>,
}

/// Loaded configuration plus the file it was loaded from.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    file: ConfigFile,
    /// The file on disk does not match `file` and must be rewritten.
    stale: bool,
}

impl Config {
    /// Loads the configuration from its default location.
    ///
    /// `$CEDIT_CONFIG` wins; otherwise the file sits next to the running
    /// executable (symlinks resolved, so an installed link still finds it).
    pub fn load() -> Result<Self, Error> {
        Self::load_from(default_path())
    }

    /// Loads the configuration from an explicit file. A missing file is an
    /// empty configuration.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<ConfigFile>(&content).map_err(|source| {
                Error::ConfigParse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigFile::default(),
            Err(source) => return Err(Error::ConfigRead { path, source }),
        };

        tracing::debug!(path = %path.display(), options = file.options.len(), "loaded config");
        let mut config = Self {
            path,
            file,
            stale: false,
        };
        config.normalize();
        Ok(config)
    }

    /// An empty configuration backed by `path`; the first change overwrites
    /// whatever the file holds.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: ConfigFile::default(),
            stale: true,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value for `key`, or `default` when unset or empty.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    /// Returns the value for `key` when set to something non-empty.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.file
            .options
            .get(&key.to_lowercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Sets `key` to `value` and writes the file.
    ///
    /// An empty value removes the key. Setting the current value again is a
    /// no-op that leaves the file untouched.
    pub fn set_and_save(&mut self, key: &str, value: &str) -> Result<Change, Error> {
        let key = key.to_lowercase();
        if value.is_empty() {
            return self.remove(&key);
        }
        if self.value(&key) == Some(value) && !self.stale {
            return Ok(Change::Unchanged);
        }

        let mut next = self.file.clone();
        next.options.insert(key, value.to_string());
        self.commit(next)
    }

    /// Removes `key` and writes the file.
    pub fn remove(&mut self, key: &str) -> Result<Change, Error> {
        let key = key.to_lowercase();
        if !self.file.options.contains_key(&key) && !self.stale {
            return Ok(Change::Unchanged);
        }

        let mut next = self.file.clone();
        next.options.remove(&key);
        self.commit(next)
    }

    /// All set options in key order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.file
            .options
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Typed accessors
    // -------------------------------------------------------------------------

    /// Configured editor command line.
    pub fn editor(&self) -> Option<&str> {
        self.value("editor")
    }

    /// Configured elevation command line.
    pub fn elevcmd(&self) -> Option<&str> {
        self.value("elevcmd")
    }

    /// Editor used in place of `editor` when elevation is needed.
    pub fn rooteditor(&self) -> Option<&str> {
        self.value("rooteditor")
    }

    /// Extra directories searched for target paths.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        self.value("paths")
            .map(|v| {
                env::split_paths(v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Aliases
    // -------------------------------------------------------------------------

    /// Saved argument list for `name`.
    pub fn alias(&self, name: &str) -> Option<&[String]> {
        self.file
            .aliases
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
    }

    /// All aliases in name order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.file
            .aliases
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Stores `args` under `name` and writes the file.
    pub fn set_alias(&mut self, name: &str, args: &[String]) -> Result<Change, Error> {
        let name = name.to_lowercase();
        if self.alias(&name) == Some(args) && !self.stale {
            return Ok(Change::Unchanged);
        }

        let mut next = self.file.clone();
        next.aliases.insert(name, args.to_vec());
        self.commit(next)
    }

    /// Deletes the alias `name` and writes the file.
    pub fn remove_alias(&mut self, name: &str) -> Result<Change, Error> {
        let name = name.to_lowercase();
        if !self.file.aliases.contains_key(&name) && !self.stale {
            return Ok(Change::Unchanged);
        }

        let mut next = self.file.clone();
        next.aliases.remove(&name);
        self.commit(next)
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Writes `next` to disk, adopting it in memory only once the write landed.
    fn commit(&mut self, next: ConfigFile) -> Result<Change, Error> {
        write_atomic(&self.path, &next).map_err(|source| Error::ConfigWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved config");
        self.file = next;
        self.stale = false;
        Ok(Change::Saved)
    }

    /// Lower-cases keys and drops empty values left by hand edits.
    fn normalize(&mut self) {
        let options = std::mem::take(&mut self.file.options);
        self.file.options = options
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let aliases = std::mem::take(&mut self.file.aliases);
        self.file.aliases = aliases
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
    }
}

/// Default configuration file location.
pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let dir = env::current_exe()
        .and_then(fs::canonicalize)
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(CONFIG_FILE_NAME)
}

fn write_atomic(path: &Path, file: &ConfigFile) -> io::Result<()> {
    let content =
        toml::to_string(file).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
