//! Behavioral tests for config discovery and loading.
//!
//! - `smsid.toml` discovered from the working directory upward
//! - `--config` / `SMSID_CONFIG` override
//! - `[output].format` default and its precedence
//! - Unknown keys warn, bad versions fail

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const JSON_CONFIG: &str = "version = 1\n\n[output]\nformat = \"json\"\n";

#[test]
fn configured_format_applies_without_flag() {
    let project = Project::with_config(JSON_CONFIG);
    let output = project
        .cmd()
        .args(["detect", ROOTER_MESSAGE])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json[0]["service"], "ROOTER");
}

#[test]
fn output_flag_overrides_configured_format() {
    let project = Project::with_config(JSON_CONFIG);
    project
        .cmd()
        .args(["detect", "-o", "text", ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout("ROOTER\n");
}

#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::with_config(JSON_CONFIG);
    project.file("nested/deeper/.keep", "");

    let output = project
        .cmd()
        .current_dir(project.path().join("nested/deeper"))
        .args(["detect", ROOTER_MESSAGE])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output).is_array());
}

#[test]
fn explicit_config_flag_is_used() {
    let project = Project::empty();
    let path = project.file("configs/custom.toml", JSON_CONFIG);

    let output = project
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["detect", ROOTER_MESSAGE])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output).is_array());
}

#[test]
fn smsid_config_env_is_used() {
    let project = Project::empty();
    let path = project.file("configs/custom.toml", JSON_CONFIG);

    let output = project
        .cmd()
        .env("SMSID_CONFIG", &path)
        .args(["detect", ROOTER_MESSAGE])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output).is_array());
}

#[test]
fn missing_explicit_config_exits_two() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-C", "nope.toml", "detect", ROOTER_MESSAGE])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn unsupported_version_exits_two() {
    let project = Project::with_config("version = 2\n");
    project
        .cmd()
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn invalid_toml_exits_two() {
    let project = Project::with_config("version = \n");
    project
        .cmd()
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config error"));
}

#[test]
fn unknown_keys_warn_and_continue() {
    let project = Project::with_config("version = 1\nretries = 3\n\n[output]\ncolour = true\n");
    project
        .cmd()
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout("ROOTER\n")
        .stderr(predicates::str::contains(
            "smsid: warning: ",
        ))
        .stderr(predicates::str::contains("unrecognized field `retries` (ignored)"))
        .stderr(predicates::str::contains("unrecognized field `output.colour` (ignored)"));
}

#[test]
fn duplicate_profile_names_exit_two() {
    let project = Project::with_config(
        "version = 1\n\n[[profile]]\nname = \"a\"\n\n[[profile]]\nname = \"a\"\n",
    );
    project
        .cmd()
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("duplicate profile"));
}

#[test]
fn mistyped_profile_formats_exit_two() {
    let project = Project::with_config(
        "version = 1\n\n[[profile]]\nname = \"p\"\nformats = \"Your code {otp}\"\n",
    );
    project
        .cmd()
        .args(["extract", "Your code 1234", "--profile", "p"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains(
            "profile.p.formats must be an array of strings",
        ));
}
