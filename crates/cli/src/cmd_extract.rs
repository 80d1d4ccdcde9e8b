// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extract command implementation.

use smsid::cli::{Cli, ExtractArgs, OutputFormat};
use smsid::color::resolve_color;
use smsid::error::{Error, ExitCode};
use smsid::output::json::{ExtractionOutput, JsonFormatter};
use smsid::output::text::TextFormatter;
use smsid::template::{KeywordFilter, TemplateSet};

/// Run the extract command.
pub fn run(cli: &Cli, args: &ExtractArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let format = OutputFormat::resolve(args.output.output, config.output.format);

    let (formats, mut keywords) = match &args.profile {
        Some(name) => {
            let profile = config
                .profile(name)
                .ok_or_else(|| Error::Argument(format!("unknown profile: {}", name)))?;
            (profile.formats.clone(), profile.keywords.clone())
        }
        None => (args.formats.clone(), Vec::new()),
    };
    keywords.extend(args.keywords.iter().cloned());

    if formats.is_empty() {
        return Err(
            Error::Argument("no templates given (use --format or --profile)".into()).into(),
        );
    }

    let templates = TemplateSet::compile(&formats).map_err(Error::from)?;
    if templates.is_empty() {
        return Err(Error::Argument("no template contains an {otp} placeholder".into()).into());
    }
    let filter = KeywordFilter::new(&keywords).map_err(Error::from)?;

    let message = match &args.message {
        Some(message) => message.clone(),
        None => crate::read_input(None)?,
    };

    let extracted = if filter.accepts(&message) {
        templates.extract(&message)
    } else {
        tracing::debug!("message rejected by keyword filter");
        None
    };

    match format {
        OutputFormat::Text => match &extracted {
            Some(found) => {
                let mut formatter =
                    TextFormatter::stdout(resolve_color(args.output.color, args.output.no_color));
                formatter.write_otp(&found.otp)?;
            }
            None => eprintln!("smsid: no OTP found"),
        },
        OutputFormat::Json => {
            let output = ExtractionOutput::from(extracted.as_ref());
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }

    Ok(if extracted.is_some() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
