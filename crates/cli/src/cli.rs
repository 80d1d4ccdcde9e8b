// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use crate::output::OutputFormat;

/// Identify the service behind an OTP text message and extract its passcode
#[derive(Parser)]
#[command(name = "smsid")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SMSID_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Name the service that sent each message
    Detect(DetectArgs),
    /// Extract an OTP using message templates
    Extract(ExtractArgs),
    /// Parse an SMS gateway body and detect its service
    Parse(ParseArgs),
    /// List built-in services in priority order
    Services(ServicesArgs),
}

/// Output flags shared by every command.
#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Output format [default: text, or [output].format from config]
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct DetectArgs {
    /// Message texts (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub messages: Vec<String>,

    /// Treat each stdin line as a separate message
    #[arg(long)]
    pub each_line: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Message text (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub message: Option<String>,

    /// OTP template, e.g. "Your code is {otp}" (repeatable, tried in order)
    #[arg(short, long = "format", value_name = "TEMPLATE")]
    pub formats: Vec<String>,

    /// Use templates and keywords from a config profile
    #[arg(short, long, value_name = "NAME", conflicts_with = "formats")]
    pub profile: Option<String>,

    /// Only accept messages containing one of these keywords (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// File holding the raw gateway body (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct ServicesArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
