//! Test helpers for behavioral tests.
//!
//! Provides a small DSL for running the smsid binary inside throwaway projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};

/// UniPin message from the reference scenarios.
pub const UNIPIN_MESSAGE: &str =
    "Your OTP for UniPin is 448808. It will expire on 03-08-2025 15:22:15.";

/// ROOTER message from the reference scenarios.
pub const ROOTER_MESSAGE: &str = "Your OTP for login at ROOTER is: 5274";

/// ROOTER message with a code too short to match.
pub const SHORT_ROOTER_MESSAGE: &str = "Your OTP for login at ROOTER is: 52";

/// A gateway body carrying the UniPin message.
pub const GATEWAY_BODY: &str = "\
Sender: UNIPIN
Receiver: \"SIM1\" 919876543210
SCTS: 250803152215
SMSC: +919800000000
Slot: 1
Your OTP for UniPin is 448808. It will expire on
03-08-2025 15:22:15.
";

/// Returns a Command configured to run the smsid binary.
///
/// Color and logging variables from the caller's environment are cleared so
/// output is stable.
pub fn smsid_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("smsid"));
    cmd.env_remove("SMSID_CONFIG")
        .env_remove("SMSID_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COLOR");
    cmd
}

/// A temporary project directory that stops config discovery at its root.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Empty project (with a `.git` marker so discovery stays inside).
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with the given `smsid.toml`.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file("smsid.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// smsid command running in this project.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = smsid_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Parse a successful command's stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}):\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}
