// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::catalog::{Detection, ServiceEntry};
use crate::gateway::InboundSms;
use crate::template::Extracted;

/// One classified message.
#[derive(Debug, Serialize)]
pub struct DetectionOutput<'a> {
    pub message: &'a str,
    pub service: &'a str,
    pub matched: bool,
}

impl<'a> DetectionOutput<'a> {
    pub fn new(message: &'a str, detection: Detection<'a>) -> Self {
        Self {
            message,
            service: detection.name(),
            matched: detection.is_matched(),
        }
    }
}

/// Result of an OTP extraction.
#[derive(Debug, Serialize)]
pub struct ExtractionOutput<'a> {
    pub found: bool,
    pub otp: Option<&'a str>,
    pub template: Option<&'a str>,
}

impl<'a> From<Option<&'a Extracted<'a>>> for ExtractionOutput<'a> {
    fn from(extracted: Option<&'a Extracted<'a>>) -> Self {
        Self {
            found: extracted.is_some(),
            otp: extracted.map(|e| e.otp.as_str()),
            template: extracted.map(|e| e.template),
        }
    }
}

/// A parsed gateway body with its detected service.
#[derive(Debug, Serialize)]
pub struct InboundOutput<'a> {
    pub sender: &'a str,
    pub receiver: &'a str,
    pub port: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<NaiveDateTime>,
    pub message: &'a str,
    pub service: &'a str,
}

impl<'a> InboundOutput<'a> {
    pub fn new(sms: &'a InboundSms, detection: Detection<'a>) -> Self {
        Self {
            sender: &sms.sender,
            receiver: &sms.receiver,
            port: &sms.port,
            sent_at: sms.sent_at,
            message: &sms.message,
            service: detection.name(),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Serialize)]
pub struct ServiceOutput {
    pub priority: usize,
    pub name: String,
    pub pattern: String,
}

impl ServiceOutput {
    /// Entries numbered from 1 in priority order.
    pub fn list(entries: &[ServiceEntry]) -> Vec<Self> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Self {
                priority: i + 1,
                name: entry.name().to_string(),
                pattern: entry.pattern().to_string(),
            })
            .collect()
    }
}

/// Buffered JSON writer.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `value` as pretty-printed JSON followed by a newline.
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
