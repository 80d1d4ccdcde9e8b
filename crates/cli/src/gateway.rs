// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound SMS gateway bodies.
//!
//! Gateways forward each received SMS as a plain-text body of header lines
//! followed by the message text:
//!
//! ```text
//! Sender: UNIPIN
//! Receiver: "SIM1" 919876543210
//! SCTS: 250803152215
//! SMSC: +919800000000
//! Slot: 1
//! Your OTP for UniPin is 448808.
//! It will expire on 03-08-2025 15:22:15.
//! ```

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::catalog::{Detection, ServiceCatalog};
use crate::template::normalize_to_single_line;

const UNKNOWN: &str = "Unknown";

/// Header lines that are not part of the message text.
const HEADERS: &[&str] = &["Sender:", "Receiver:", "SCTS:", "SMSC:", "Slot:"];

#[allow(clippy::expect_used)]
static QUOTED_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*"#).expect("valid regex"));

/// A parsed gateway body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundSms {
    pub sender: String,
    /// Receiving number, without the port label.
    pub receiver: String,
    /// Modem port or SIM label quoted on the `Receiver:` line.
    pub port: String,
    /// Service-centre timestamp, when present and valid.
    pub sent_at: Option<NaiveDateTime>,
    /// Message text on a single line.
    pub message: String,
}

impl InboundSms {
    /// Detect the sending service with the built-in catalog.
    pub fn detect(&self) -> Detection<'static> {
        ServiceCatalog::builtin().detect(&self.message)
    }
}

/// Parse a raw gateway body. Missing fields fall back to defaults.
pub fn parse_inbound(raw: &str) -> InboundSms {
    let sender = header_value(raw, "Sender:")
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let receiver_line = header_value(raw, "Receiver:").unwrap_or_default();
    let port = QUOTED_PORT
        .captures(receiver_line)
        .and_then(|caps| caps.get(1))
        .map_or(UNKNOWN, |m| m.as_str())
        .to_string();
    let receiver = QUOTED_PORT.replace(receiver_line, "").trim().to_string();
    let receiver = if receiver.is_empty() {
        UNKNOWN.to_string()
    } else {
        receiver
    };

    let sent_at = header_value(raw, "SCTS:").and_then(parse_scts);

    let body: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !HEADERS.iter().any(|h| line.starts_with(h)))
        .collect();
    let message = normalize_to_single_line(&body.join(" "));

    tracing::debug!(%sender, %receiver, %port, "parsed inbound sms");

    InboundSms {
        sender,
        receiver,
        port,
        sent_at,
        message,
    }
}

/// Value of the first line starting with `header`, trimmed.
fn header_value<'a>(raw: &'a str, header: &str) -> Option<&'a str> {
    raw.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(header))
        .map(str::trim)
}

/// Parse an SCTS value (`YYMMDDhhmmss`, years 2000-2099).
fn parse_scts(value: &str) -> Option<NaiveDateTime> {
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() < 12 {
        tracing::debug!("scts too short: {:?}", value);
        return None;
    }
    let stamp = format!("20{}", &digits[..12]);
    match NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S") {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::debug!("invalid scts {:?}: {}", value, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
