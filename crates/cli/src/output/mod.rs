// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for command results.

pub mod json;
pub mod text;

/// Output format selected by `-o` or `[output].format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name as written in config.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Resolve the effective format: flag, then config, then text.
    pub fn resolve(flag: Option<OutputFormat>, configured: Option<OutputFormat>) -> Self {
        flag.or(configured).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
