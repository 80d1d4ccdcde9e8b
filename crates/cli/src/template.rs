// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! OTP extraction from operator-written message templates.
//!
//! A template is the expected message text with placeholders:
//!
//! ```text
//! Your OTP for UniPin is {otp}. It will expire on {datetime}
//! ```
//!
//! Placeholders compile to:
//! - `{otp}`: the captured code, 3-12 letters, digits or hyphens
//! - `{random}`: 3-15 letters or digits
//! - `{date}`, `{time}`, `{datetime}` and any other name: anything
//!
//! The surrounding text is matched loosely. Whitespace is optional, `:` may be
//! ASCII or full-width or absent, and `.` stands for any run of characters.
//! Matching ignores case.

use regex::{Regex, RegexBuilder};

use crate::pattern::{MultiLiteralMatcher, PatternError};

const OTP_CLASS: &str = "[A-Za-z0-9-]{3,12}";
const RANDOM_CLASS: &str = "[A-Za-z0-9]{3,15}";
const ANYTHING: &str = ".*";

/// Error compiling an OTP template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template has no {{otp}} placeholder: {0}")]
    MissingOtp(String),

    #[error("template `{format}` is not a valid pattern: {source}")]
    InvalidRegex {
        format: String,
        #[source]
        source: regex::Error,
    },
}

/// Collapse line breaks and whitespace runs to single spaces and trim.
pub fn normalize_to_single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A compiled OTP template.
#[derive(Debug, Clone)]
pub struct OtpTemplate {
    format: String,
    regex: Regex,
}

impl OtpTemplate {
    /// Compile a template. Fails if it has no `{otp}` placeholder.
    pub fn compile(format: &str) -> Result<Self, TemplateError> {
        let format = normalize_to_single_line(format);
        let pattern = template_pattern(&format)?;
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| TemplateError::InvalidRegex {
                format: format.clone(),
                source,
            })?;
        Ok(Self { format, regex })
    }

    /// The normalized template text.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The generated regex source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Extract the OTP from `message`, if the template matches it.
    pub fn extract(&self, message: &str) -> Option<String> {
        let message = normalize_to_single_line(message);
        let caps = self.regex.captures(&message)?;
        caps.name("otp")
            .or_else(|| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Translate template text into a regex source.
fn template_pattern(format: &str) -> Result<String, TemplateError> {
    let mut pattern = String::with_capacity(format.len() * 2);
    let mut otp_groups = 0usize;
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        // `{{otp}}` is a placeholder inside literal braces; only the
        // innermost `{...}` names a placeholder.
        if c == '{'
            && let Some(close) = rest.find('}')
            && !rest[1..close].contains('{')
        {
            let name = &rest[1..close];
            if name.eq_ignore_ascii_case("otp") {
                if otp_groups == 0 {
                    pattern.push_str(&format!("(?P<otp>{OTP_CLASS})"));
                } else {
                    // Only one group may carry the name.
                    pattern.push_str(&format!("({OTP_CLASS})"));
                }
                otp_groups += 1;
            } else if name.eq_ignore_ascii_case("random") {
                pattern.push_str(RANDOM_CLASS);
            } else {
                pattern.push_str(ANYTHING);
            }
            rest = &rest[close + 1..];
            continue;
        }

        if c.is_whitespace() {
            pattern.push_str(r"\s*");
            rest = rest.trim_start();
            continue;
        }

        match c {
            ':' => pattern.push_str("[:\u{FF1A}]?"),
            '.' => pattern.push_str(ANYTHING),
            _ => {
                let mut buf = [0u8; 4];
                pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
        rest = &rest[c.len_utf8()..];
    }

    if otp_groups == 0 {
        return Err(TemplateError::MissingOtp(format.to_string()));
    }
    Ok(pattern)
}

/// An OTP found by a [`TemplateSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub otp: String,
    /// Template that matched.
    pub template: &'a str,
}

/// Ordered list of templates; the first one that matches wins.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: Vec<OtpTemplate>,
}

impl TemplateSet {
    /// Compile templates in order.
    ///
    /// Templates without `{otp}` are skipped with a warning. Other errors are
    /// returned.
    pub fn compile<I, S>(formats: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut templates = Vec::new();
        for format in formats {
            match OtpTemplate::compile(format.as_ref()) {
                Ok(template) => templates.push(template),
                Err(TemplateError::MissingOtp(format)) => {
                    tracing::warn!("skipping template without {{otp}}: {}", format);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[OtpTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Try each template against `message` in order.
    pub fn extract(&self, message: &str) -> Option<Extracted<'_>> {
        self.templates.iter().find_map(|template| {
            let otp = template.extract(message)?;
            tracing::debug!(template = template.format(), "extracted OTP via template");
            Some(Extracted {
                otp,
                template: template.format(),
            })
        })
    }
}

/// Accepts messages containing any of a list of keywords (ASCII case-insensitive).
///
/// An empty list accepts everything.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    matcher: Option<MultiLiteralMatcher>,
}

impl KeywordFilter {
    pub fn new(keywords: &[String]) -> Result<Self, PatternError> {
        if keywords.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            matcher: Some(MultiLiteralMatcher::case_insensitive(keywords)?),
        })
    }

    pub fn accepts(&self, message: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(message),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
