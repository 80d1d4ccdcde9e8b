// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Detection prints one line per message:
//! ```text
//! UniPin
//! Not found
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::catalog::{Detection, ServiceEntry};
use crate::color::scheme;
use crate::gateway::InboundSms;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a detection result on its own line.
    pub fn write_detection(&mut self, detection: &Detection<'_>) -> std::io::Result<()> {
        self.write_detection_inline(detection)?;
        writeln!(self.out)
    }

    fn write_detection_inline(&mut self, detection: &Detection<'_>) -> std::io::Result<()> {
        let spec = if detection.is_matched() {
            scheme::service()
        } else {
            scheme::not_found()
        };
        self.out.set_color(&spec)?;
        write!(self.out, "{}", detection)?;
        self.out.reset()
    }

    /// Write an extracted OTP on its own line.
    pub fn write_otp(&mut self, otp: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::otp())?;
        write!(self.out, "{}", otp)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Write a parsed gateway body as `label: value` lines.
    pub fn write_inbound(
        &mut self,
        sms: &InboundSms,
        detection: &Detection<'_>,
    ) -> std::io::Result<()> {
        let time = sms
            .sent_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());

        self.write_field("sender", &sms.sender)?;
        self.write_field("receiver", &sms.receiver)?;
        self.write_field("port", &sms.port)?;
        self.write_field("time", &time)?;
        self.write_field("message", &sms.message)?;

        self.write_label("service")?;
        self.write_detection(detection)
    }

    /// Write catalog entries in priority order.
    pub fn write_services(&mut self, entries: &[ServiceEntry]) -> std::io::Result<()> {
        for entry in entries {
            self.out.set_color(&scheme::service())?;
            write!(self.out, "{}", entry.name())?;
            self.out.reset()?;
            writeln!(self.out, "  {}", entry.pattern())?;
        }
        Ok(())
    }

    fn write_label(&mut self, label: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{}:", label)?;
        self.out.reset()?;
        write!(self.out, " ")
    }

    fn write_field(&mut self, label: &str, value: &str) -> std::io::Result<()> {
        self.write_label(label)?;
        writeln!(self.out, "{}", value)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
