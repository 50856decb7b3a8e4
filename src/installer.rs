//! # Installer
//!
//! Symlinks the running executable into a bin directory, and removes it.
//!
//! Installing picks a directory, checks that the command is not already
//! installed, then (after the caller confirms) creates the symlink in one
//! filesystem call.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    os::unix::fs::symlink,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};

use crate::{
    constants::{APP_NAME, SYSTEM_BIN_DIR, SYSTEM_INSTALL_DIR, USER_BIN_DIRS},
    environment::Environment,
    error::Error,
    resolver::Resolver,
};

/// Where to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    /// System-wide directory.
    Auto,
    /// A bin directory under the user's home.
    User,
    /// An explicit directory.
    Dir(PathBuf),
}

/// A symlink to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// The executable the link points at.
    pub source: PathBuf,
    /// The link to create.
    pub link: PathBuf,
}

/// Chooses the install directory.
pub fn choose_directory(target: &InstallTarget, env: &Environment) -> Result<PathBuf> {
    let dir = match target {
        InstallTarget::Auto => {
            let preferred = Path::new(SYSTEM_INSTALL_DIR);
            if env.on_search_path(preferred) && preferred.is_dir() {
                preferred.to_path_buf()
            } else {
                PathBuf::from(SYSTEM_BIN_DIR)
            }
        }
        InstallTarget::User => user_directory(env)?,
        InstallTarget::Dir(dir) => dir.clone(),
    };

    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir).into());
    }
    Ok(dir)
}

fn user_directory(env: &Environment) -> Result<PathBuf> {
    let Some(home) = env.home.as_deref() else {
        bail!(
            "unable to find your home directory\n\
             Create the symlink yourself: ln -s /path/to/{APP_NAME} ~/.local/bin/{APP_NAME}\n\
             and make sure that directory is on your PATH."
        );
    };

    let existing: Vec<PathBuf> = USER_BIN_DIRS
        .iter()
        .map(|rel| home.join(rel))
        .filter(|dir| dir.is_dir())
        .collect();

    existing
        .iter()
        .find(|dir| env.on_search_path(dir))
        .or_else(|| existing.first())
        .cloned()
        .ok_or_else(|| Error::NotADirectory(home.join(USER_BIN_DIRS[0])).into())
}

/// Plans an install of `source` into `target`, refusing when the command is
/// already resolvable or the link path is taken.
pub fn plan_install(
    source: &Path,
    target: &InstallTarget,
    env: &Environment,
    resolver: &Resolver,
) -> Result<InstallPlan> {
    let dir = choose_directory(target, env)?;

    if let Some(existing) = resolver.resolve_on_search_path(APP_NAME) {
        return Err(Error::AlreadyInstalled(existing).into());
    }

    let link = dir.join(APP_NAME);
    if link.symlink_metadata().is_ok() {
        return Err(Error::AlreadyInstalled(link).into());
    }

    Ok(InstallPlan {
        source: source.to_path_buf(),
        link,
    })
}

/// Creates the planned symlink.
pub fn install(plan: &InstallPlan) -> Result<(), Error> {
    symlink(&plan.source, &plan.link).map_err(|source| Error::Install {
        action: "creating symlink",
        path: plan.link.clone(),
        hint: "--install",
        source,
    })?;
    tracing::debug!(link = %plan.link.display(), source = %plan.source.display(), "installed");
    Ok(())
}

/// Finds the installed symlink on the search path.
pub fn find_installed(resolver: &Resolver) -> Result<PathBuf, Error> {
    let link = resolver
        .resolve_on_search_path(APP_NAME)
        .ok_or(Error::NotInstalled)?;

    let is_link = link
        .symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return Err(Error::NotASymlink(link));
    }
    Ok(link)
}

/// Removes an installed symlink.
pub fn uninstall(link: &Path) -> Result<(), Error> {
    fs::remove_file(link).map_err(|source| Error::Install {
        action: "removing symlink",
        path: link.to_path_buf(),
        hint: "--remove",
        source,
    })?;
    tracing::debug!(link = %link.display(), "uninstalled");
    Ok(())
}
