// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identify the service behind an OTP text message.
//!
//! ```
//! use smsid::detect_service_name;
//!
//! assert_eq!(detect_service_name("Your OTP for login at ROOTER is: 5274"), "ROOTER");
//! assert_eq!(detect_service_name("Random message"), "Not found");
//! ```

pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod gateway;
pub mod output;
pub mod pattern;
pub mod template;

pub use catalog::{Detection, NOT_FOUND, ServiceCatalog, ServiceEntry, detect_service_name};
pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use gateway::{InboundSms, parse_inbound};
pub use template::{KeywordFilter, OtpTemplate, TemplateSet, normalize_to_single_line};
