// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! smsid CLI entry point.

use std::io::Read;
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use smsid::cli::{Cli, Command};
use smsid::config::{self, Config};
use smsid::discovery;
use smsid::env;
use smsid::error::ExitCode;

mod cmd_detect;
mod cmd_extract;
mod cmd_parse;
mod cmd_services;

fn init_logging() {
    let filter = EnvFilter::try_from_env(env::names::SMSID_LOG)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("smsid: {}", e);
            match e.downcast_ref::<smsid::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Detect(args)) => cmd_detect::run(&cli, args),
        Some(Command::Extract(args)) => cmd_extract::run(&cli, args),
        Some(Command::Parse(args)) => cmd_parse::run(&cli, args),
        Some(Command::Services(args)) => cmd_services::run(&cli, args),
    }
}

/// Load config from `--config`, discovery, or defaults.
pub(crate) fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    Ok(config)
}

/// Read all of stdin, or a file when given.
pub(crate) fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| {
            smsid::Error::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
