//! Common test utilities
//!
//! Every command runs inside its own temporary working directory with an
//! isolated config home, so the default `Enrollments.json` never touches
//! the real filesystem.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary working directory for one test
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default roster file
    pub fn roster(&self) -> PathBuf {
        self.path().join("Enrollments.json")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// The binary, run from this workspace with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("course-registration").unwrap();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("COURSE_REG_CONFIG")
            .env_remove("COURSE_REG_FILE")
            .env_remove("COURSE_REG_LOG_LEVEL")
            .env_remove("COURSE_REG_LOG_FILE")
            .env_remove("COURSE_REG_LOG_JSON")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// A 50-dash separator line
pub fn rule() -> String {
    "-".repeat(50)
}
