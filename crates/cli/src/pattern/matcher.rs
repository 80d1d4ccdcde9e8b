// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern matchers.

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Matcher for a regex pattern, searched anywhere in the content.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

/// Matcher for multiple literal strings using an Aho-Corasick automaton.
///
/// Literals match regardless of ASCII case.
#[derive(Debug, Clone)]
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl RegexMatcher {
    /// Create a new regex matcher.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    /// The pattern source this matcher was built from.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

impl MultiLiteralMatcher {
    /// Create a matcher that ignores ASCII case.
    pub fn case_insensitive(patterns: &[String]) -> Result<Self, PatternError> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns)
            .map_err(|e| PatternError::InvalidPattern(format!("aho-corasick error: {}", e)))?;
        Ok(Self { automaton })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.automaton.is_match(content)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
