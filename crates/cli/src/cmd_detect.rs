// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detect command implementation.

use rayon::prelude::*;

use smsid::catalog::{Detection, ServiceCatalog};
use smsid::cli::{Cli, DetectArgs, OutputFormat};
use smsid::color::resolve_color;
use smsid::error::ExitCode;
use smsid::output::json::{DetectionOutput, JsonFormatter};
use smsid::output::text::TextFormatter;

/// Run the detect command.
pub fn run(cli: &Cli, args: &DetectArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let format = OutputFormat::resolve(args.output.output, config.output.format);

    let messages = if args.messages.is_empty() {
        split_input(&crate::read_input(None)?, args.each_line)
    } else {
        args.messages.clone()
    };

    // Each call only reads the shared catalog, so messages classify independently.
    let catalog = ServiceCatalog::builtin();
    let detections: Vec<Detection<'static>> =
        messages.par_iter().map(|m| catalog.detect(m)).collect();

    let matched = detections.iter().filter(|d| d.is_matched()).count();
    tracing::debug!("classified {} message(s), {} matched", messages.len(), matched);

    match format {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.output.color, args.output.no_color));
            for detection in &detections {
                formatter.write_detection(detection)?;
            }
        }
        OutputFormat::Json => {
            let results: Vec<DetectionOutput<'_>> = messages
                .iter()
                .zip(&detections)
                .map(|(message, detection)| DetectionOutput::new(message, *detection))
                .collect();
            JsonFormatter::new(std::io::stdout().lock()).write(&results)?;
        }
    }

    Ok(ExitCode::Success)
}

/// Split stdin into messages: the whole input, or one per non-blank line.
fn split_input(input: &str, each_line: bool) -> Vec<String> {
    if each_line {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    } else {
        vec![input.trim_end_matches(['\r', '\n']).to_string()]
    }
}
