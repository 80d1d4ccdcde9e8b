// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{OutputConfig, ProfileConfig};
use crate::error::{Error, Result};
use crate::output::OutputFormat;

const KNOWN_OUTPUT_KEYS: &[&str] = &["format"];
const KNOWN_PROFILE_KEYS: &[&str] = &["name", "formats", "keywords"];

/// Parse an optional TOML array of strings; absent means empty.
///
/// `key` names the field in error messages (e.g. `profile.simpl.formats`).
fn parse_string_array(
    value: Option<&toml::Value>,
    key: &str,
    path: &Path,
) -> Result<Vec<String>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Some(items) = value.as_array() else {
        return Err(config_error(
            path,
            format!("{} must be an array of strings, got {}", key, value.type_str()),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(String::from).ok_or_else(|| {
                config_error(
                    path,
                    format!("{}[{}] must be a string, got {}", key, index, item.type_str()),
                )
            })
        })
        .collect()
}

fn config_error(path: &Path, message: String) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

/// Parse the `[output]` table.
pub(super) fn parse_output_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<OutputConfig> {
    let Some(value) = value else {
        return Ok(OutputConfig::default());
    };
    let Some(t) = value.as_table() else {
        return Err(config_error(
            path,
            format!("output must be a table, got {}", value.type_str()),
        ));
    };

    for key in t.keys() {
        if !KNOWN_OUTPUT_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("output.{}", key));
        }
    }

    let format = match t.get("format") {
        None => None,
        Some(v) => {
            let name = v.as_str().unwrap_or_default();
            let format = OutputFormat::from_name(name).ok_or_else(|| {
                config_error(path, format!("invalid output.format: {} (expected text or json)", v))
            })?;
            Some(format)
        }
    };

    Ok(OutputConfig { format })
}

/// Parse the `[[profile]]` array of tables.
pub(super) fn parse_profiles(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<Vec<ProfileConfig>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Some(entries) = value.as_array() else {
        return Err(config_error(
            path,
            "profile must be an array of tables ([[profile]])".to_string(),
        ));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_profile(entry, index, path))
        .collect()
}

fn parse_profile(value: &toml::Value, index: usize, path: &Path) -> Result<ProfileConfig> {
    let Some(t) = value.as_table() else {
        return Err(config_error(path, format!("profile[{}] must be a table", index)));
    };

    let name = t
        .get("name")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| config_error(path, format!("profile[{}] is missing `name`", index)))?;

    for key in t.keys() {
        if !KNOWN_PROFILE_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("profile.{}.{}", name, key));
        }
    }

    let formats =
        parse_string_array(t.get("formats"), &format!("profile.{}.formats", name), path)?;
    let keywords =
        parse_string_array(t.get("keywords"), &format!("profile.{}.keywords", name), path)?;

    Ok(ProfileConfig {
        name,
        formats,
        keywords,
    })
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "smsid: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
