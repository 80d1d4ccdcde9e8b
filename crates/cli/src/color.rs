// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY and not running under CI

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env;

/// Resolve color choice from flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if env::no_color() {
        return ColorChoice::Never;
    }
    if env::force_color() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || env::ci() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color specs for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Green service name on a match.
    pub fn service() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Yellow "Not found" / "no OTP" indicator.
    pub fn not_found() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold extracted OTP.
    pub fn otp() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan field label (e.g., "sender:").
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
