//! Test helpers for the CLI behavior tests.
//!
//! Provides a small DSL for running greplite against stdin or a temporary
//! directory tree.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a Command configured to run the greplite binary
pub fn greplite_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("greplite"));
    cmd.env_remove("GREPLITE_CONFIG")
        .env_remove("GREPLITE_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COLOR");
    cmd
}

/// `greplite -E <pattern>` with `input` on stdin.
pub fn grep_stdin(pattern: &str, input: &str) -> assert_cmd::assert::Assert {
    greplite_cmd()
        .args(["-E", pattern])
        .write_stdin(input)
        .assert()
}

/// Temporary directory populated with text files.
pub struct Tree {
    dir: tempfile::TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Add a file, creating parent directories as needed.
    pub fn file(self, name: &str, content: &str) -> Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// A greplite command running inside the tree.
    pub fn cmd(&self) -> Command {
        let mut cmd = greplite_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
