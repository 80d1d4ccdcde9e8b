// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Services command implementation.

use smsid::catalog::ServiceCatalog;
use smsid::cli::{Cli, OutputFormat, ServicesArgs};
use smsid::color::resolve_color;
use smsid::error::ExitCode;
use smsid::output::json::{JsonFormatter, ServiceOutput};
use smsid::output::text::TextFormatter;

/// Run the services command.
pub fn run(cli: &Cli, args: &ServicesArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let format = OutputFormat::resolve(args.output.output, config.output.format);
    let entries = ServiceCatalog::builtin().entries();

    match format {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.output.color, args.output.no_color));
            formatter.write_services(entries)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&ServiceOutput::list(entries))?;
        }
    }

    Ok(ExitCode::Success)
}
