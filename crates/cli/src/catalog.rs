// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service detection for OTP messages.
//!
//! A catalog is an ordered list of (service name, pattern) entries. Detection
//! scans entries in declared order and returns the first whose pattern occurs
//! anywhere in the message. Later entries are not evaluated once one matches.

use std::fmt;
use std::sync::LazyLock;

use crate::pattern::{PatternError, RegexMatcher};

/// Returned when no entry matches.
pub const NOT_FOUND: &str = "Not found";

/// Built-in services in priority order.
pub const BUILTIN_SERVICES: &[(&str, &str)] = &[
    (
        "UniPin",
        r"Your OTP for UniPin is \d{4,6}\. It will expire on \d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}",
    ),
    ("ROOTER", r"Your OTP for login at ROOTER is: \d{4,6}"),
];

#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<ServiceCatalog> = LazyLock::new(|| {
    ServiceCatalog::from_table(BUILTIN_SERVICES).expect("built-in service patterns are valid")
});

/// A named service and the pattern its messages contain.
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    name: String,
    pattern: RegexMatcher,
}

impl ServiceEntry {
    /// Compile an entry.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.into(),
            pattern: RegexMatcher::new(pattern)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Outcome of a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection<'a> {
    /// Name of the first matching entry.
    Matched(&'a str),
    /// No entry matched.
    NotFound,
}

impl<'a> Detection<'a> {
    /// The service name, or [`NOT_FOUND`].
    pub fn name(&self) -> &'a str {
        match *self {
            Detection::Matched(name) => name,
            Detection::NotFound => NOT_FOUND,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Detection::Matched(_))
    }
}

impl fmt::Display for Detection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, immutable list of service entries.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    /// Build a catalog; `entries` order is match priority.
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    /// Compile a catalog from (name, pattern) pairs.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self, PatternError> {
        let entries = table
            .iter()
            .map(|(name, pattern)| ServiceEntry::new(*name, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static ServiceCatalog {
        &BUILTIN
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose pattern occurs in `text`.
    pub fn detect(&self, text: &str) -> Detection<'_> {
        match self.first_entry(|entry| entry.is_match(text)) {
            Some(entry) => {
                tracing::trace!(service = entry.name(), "message matched");
                Detection::Matched(entry.name())
            }
            None => Detection::NotFound,
        }
    }

    /// First entry accepted by `accept`, in declared order. Entries after it
    /// are never passed to `accept`.
    fn first_entry(&self, accept: impl FnMut(&&ServiceEntry) -> bool) -> Option<&ServiceEntry> {
        self.entries.iter().find(accept)
    }
}

/// Name of the built-in service that sent `text`, or [`NOT_FOUND`].
pub fn detect_service_name(text: &str) -> &'static str {
    ServiceCatalog::builtin().detect(text).name()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
