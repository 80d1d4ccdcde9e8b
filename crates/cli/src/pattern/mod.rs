// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern matching for message classification.
//!
//! - Service patterns: regex crate (linear-time search)
//! - Keyword lists: aho-corasick

pub mod matcher;

pub use matcher::{MultiLiteralMatcher, PatternError, RegexMatcher};
