// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles smsid.toml parsing with version validation and unknown key warnings.
//!
//! ```toml
//! version = 1
//!
//! [output]
//! format = "json"
//!
//! [[profile]]
//! name = "simpl"
//! formats = ["authorize it using OTP {otp}"]
//! keywords = ["Simpl Pay"]
//! ```

mod parse;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use parse::{parse_output_config, parse_profiles, warn_unknown_key};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "smsid.toml";

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(default)]
    profile: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Output settings.
    pub output: OutputConfig,

    /// Named OTP extraction profiles (`[[profile]]`).
    pub profiles: Vec<ProfileConfig>,
}

impl Config {
    /// Look up an extraction profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.iter().find(|p| p.name == name)
    }

    fn validate(self, path: &Path) -> Result<Self> {
        if let Some(name) = self.duplicate_profile() {
            return Err(Error::Config {
                message: format!("duplicate profile name: {}", name),
                path: Some(path.to_path_buf()),
            });
        }
        Ok(self)
    }

    fn duplicate_profile(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        self.profiles
            .iter()
            .map(|p| p.name.as_str())
            .find(|name| !seen.insert(*name))
    }
}

/// `[output]` section.
#[derive(Debug, Default, Clone)]
pub struct OutputConfig {
    /// Default output format when `-o` is not given.
    pub format: Option<OutputFormat>,
}

/// `[[profile]]` entry: templates and keywords for one sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub name: String,

    /// OTP templates, tried in order.
    pub formats: Vec<String>,

    /// Messages must contain one of these (empty = any message).
    pub keywords: Vec<String>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "output", "profile"];

/// Load config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
///
/// Unknown keys produce a warning on stderr and are otherwise ignored.
/// Known keys with the wrong type are errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let output = parse_output_config(flexible.output.as_ref(), path)?;
    let profiles = parse_profiles(flexible.profile.as_ref(), path)?;

    Config {
        version,
        output,
        profiles,
    }
    .validate(path)
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade smsid to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
