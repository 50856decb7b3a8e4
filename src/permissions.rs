//! # Permission Classifier
//!
//! Decides whether opening a path for writing needs elevated privileges.
//!
//! Anything ambiguous resolves to "needs elevation".
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
};

use nix::unistd::{access, geteuid, AccessFlags};

/// User id of the superuser account.
const ROOT_UID: u32 = 0;

/// Credential checks used by the classifier.
pub trait Credentials {
    /// Whether the process runs as the superuser.
    fn is_superuser(&self) -> bool;

    /// Whether the effective user may write to `path`.
    fn can_write(&self, path: &Path) -> bool;
}

/// Credentials of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCredentials;

impl Credentials for ProcessCredentials {
    fn is_superuser(&self) -> bool {
        geteuid().is_root()
    }

    fn can_write(&self, path: &Path) -> bool {
        access(path, AccessFlags::W_OK).is_ok()
    }
}

/// Why a path was classified the way it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Running as the superuser already.
    Superuser,
    /// The effective user can write to the checked path.
    Writable,
    /// The checked path is owned by the superuser.
    RootOwned,
    /// Not writable, or its metadata could not be read.
    NotWritable,
}

impl Verdict {
    pub const fn needs_elevation(self) -> bool {
        matches!(self, Self::RootOwned | Self::NotWritable)
    }
}

/// Classifies target paths against a set of credentials.
#[derive(Debug, Clone, Default)]
pub struct Classifier<C = ProcessCredentials> {
    credentials: C,
}

impl Classifier<ProcessCredentials> {
    /// Classifier using the running process's credentials.
    pub const fn current() -> Self {
        Self {
            credentials: ProcessCredentials,
        }
    }
}

impl<C: Credentials> Classifier<C> {
    pub const fn new(credentials: C) -> Self {
        Self { credentials }
    }

    /// Whether opening `path` for writing requires elevation.
    pub fn needs_elevation(&self, path: &Path) -> bool {
        self.classify(path).needs_elevation()
    }

    /// Classifies `path`, reporting the reason.
    pub fn classify(&self, path: &Path) -> Verdict {
        if self.credentials.is_superuser() {
            return Verdict::Superuser;
        }

        let checked = existing_target(path);
        let verdict = if self.credentials.can_write(&checked) {
            Verdict::Writable
        } else {
            match fs::metadata(&checked) {
                Ok(meta) if meta.uid() == ROOT_UID => Verdict::RootOwned,
                _ => Verdict::NotWritable,
            }
        };

        tracing::debug!(
            path = %path.display(),
            checked = %checked.display(),
            ?verdict,
            "classified target"
        );
        verdict
    }
}

/// The path whose permissions govern writing `path`.
///
/// Existing paths govern themselves. A missing file is created in its parent
/// directory, so the parent governs. If the parent is missing too, the
/// current working directory stands in.
fn existing_target(path: &Path) -> PathBuf {
    if path.symlink_metadata().is_ok() {
        return path.to_path_buf();
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && parent.exists() => parent.to_path_buf(),
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::TempDir;

    use super::*;

    /// Credentials that only allow writing to listed paths.
    #[derive(Default)]
    struct FakeCredentials {
        superuser: bool,
        writable: HashSet<PathBuf>,
    }

    impl FakeCredentials {
        fn writable(paths: &[&Path]) -> Self {
            Self {
                superuser: false,
                writable: paths.iter().map(|p| p.to_path_buf()).collect(),
            }
        }
    }

    impl Credentials for FakeCredentials {
        fn is_superuser(&self) -> bool {
            self.superuser
        }

        fn can_write(&self, path: &Path) -> bool {
            self.writable.contains(path)
        }
    }

    #[test]
    fn test_superuser_never_needs_elevation() {
        let classifier = Classifier::new(FakeCredentials {
            superuser: true,
            writable: HashSet::new(),
        });
        assert_eq!(classifier.classify(Path::new("/etc/passwd")), Verdict::Superuser);
        assert!(!classifier.needs_elevation(Path::new("/etc/passwd")));
    }

    #[test]
    fn test_root_owned_unwritable_needs_elevation() {
        let classifier = Classifier::new(FakeCredentials::default());
        assert_eq!(classifier.classify(Path::new("/etc/passwd")), Verdict::RootOwned);
        assert!(classifier.needs_elevation(Path::new("/etc/passwd")));
    }

    #[test]
    fn test_writable_path_does_not_need_elevation() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("notes.txt");
        fs::write(&file, "hi").expect("write");

        let classifier = Classifier::new(FakeCredentials::writable(&[&file]));
        assert_eq!(classifier.classify(&file), Verdict::Writable);
        assert!(!classifier.needs_elevation(&file));
    }

    #[test]
    fn test_writable_root_owned_path_does_not_need_elevation() {
        let etc = Path::new("/etc");
        let classifier = Classifier::new(FakeCredentials::writable(&[etc]));
        assert!(!classifier.needs_elevation(etc));
    }

    #[test]
    fn test_missing_file_uses_parent_directory() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("new.txt");

        let writable = Classifier::new(FakeCredentials::writable(&[dir.path()]));
        assert!(!writable.needs_elevation(&file));

        // The verdict depends on who owns the temp dir, root in many CI runs
        let locked = Classifier::new(FakeCredentials::default());
        assert!(matches!(
            locked.classify(&file),
            Verdict::NotWritable | Verdict::RootOwned
        ));
        assert!(locked.needs_elevation(&file));
    }

    #[test]
    fn test_missing_file_in_root_directory() {
        let classifier = Classifier::new(FakeCredentials::default());
        let file = Path::new("/etc/cedit-test-missing.conf");
        assert_eq!(classifier.classify(file), Verdict::RootOwned);
    }

    #[test]
    fn test_missing_parent_falls_back_to_cwd() {
        let cwd = env::current_dir().expect("cwd");
        let classifier = Classifier::new(FakeCredentials::writable(&[&cwd]));
        let file = Path::new("/nonexistent-cedit-dir/sub/file.txt");
        assert!(!classifier.needs_elevation(file));

        let bare = Path::new("cedit-test-missing-file.txt");
        assert!(!classifier.needs_elevation(bare));
    }

    #[test]
    fn test_existing_target_resolution() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.txt");
        assert_eq!(existing_target(dir.path()), dir.path());
        assert_eq!(existing_target(&missing), dir.path());
    }

    #[test]
    fn test_process_credentials_on_own_temp_file() {
        let dir = TempDir::new().expect("temp dir");
        let file = dir.path().join("mine.txt");
        fs::write(&file, "x").expect("write");

        let classifier = Classifier::current();
        assert!(!classifier.needs_elevation(&file));
        assert!(!classifier.needs_elevation(&dir.path().join("new.txt")));
    }

    #[test]
    fn test_process_credentials_on_system_file() {
        if geteuid().is_root() {
            return;
        }
        assert!(Classifier::current().needs_elevation(Path::new("/etc/passwd")));
    }
}
