// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command implementation.

use smsid::cli::{Cli, OutputFormat, ParseArgs};
use smsid::color::resolve_color;
use smsid::error::ExitCode;
use smsid::gateway::parse_inbound;
use smsid::output::json::{InboundOutput, JsonFormatter};
use smsid::output::text::TextFormatter;

/// Run the parse command.
pub fn run(cli: &Cli, args: &ParseArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let format = OutputFormat::resolve(args.output.output, config.output.format);

    let raw = crate::read_input(args.file.as_deref())?;
    let sms = parse_inbound(&raw);
    let detection = sms.detect();

    match format {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.output.color, args.output.no_color));
            formatter.write_inbound(&sms, &detection)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock())
                .write(&InboundOutput::new(&sms, detection))?;
        }
    }

    Ok(ExitCode::Success)
}
