//! # Test Harness
//!
//! Isolated environment for driving the `cedit` binary: a private config
//! file, a private bin directory on `PATH`, and a scratch work directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway environment for one test.
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        fs::create_dir_all(root.path().join("bin")).expect("create bin dir");
        fs::create_dir_all(root.path().join("work")).expect("create work dir");
        Self { root }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("cedit.toml")
    }

    pub fn bin_path(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn work_path(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// File the fake editor writes its arguments to, one per line.
    pub fn record_path(&self) -> PathBuf {
        self.root.path().join("editor-args.txt")
    }

    /// A `cedit` command isolated to this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cedit").expect("binary should build");
        cmd.env("CEDIT_CONFIG", self.config_path())
            .env("PATH", self.bin_path())
            .env("CEDIT_TEST_RECORD", self.record_path())
            .env_remove("VISUAL")
            .env_remove("EDITOR")
            .env_remove("CEDIT_LOG")
            .current_dir(self.work_path());
        cmd
    }

    /// Creates an executable script in the private bin directory.
    pub fn add_executable(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin_path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        path
    }

    /// Creates a fake editor that records its arguments and exits with `code`.
    pub fn add_recording_editor(&self, name: &str, code: i32) -> PathBuf {
        self.add_executable(
            name,
            &format!("printf '%s\\n' \"$@\" > \"$CEDIT_TEST_RECORD\"\nexit {code}"),
        )
    }

    /// Arguments the fake editor received.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.record_path())
            .expect("editor should have run")
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_path().join(name);
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }
}

/// Display string for a path.
pub fn display(path: &Path) -> String {
    path.display().to_string()
}
