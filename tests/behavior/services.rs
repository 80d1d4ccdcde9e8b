//! Behavioral tests for `smsid services`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn lists_services_in_priority_order() {
    let output = smsid_cmd().arg("services").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, ["UniPin", "ROOTER"]);
}

#[test]
fn text_output_shows_patterns() {
    smsid_cmd()
        .arg("services")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            r"Your OTP for login at ROOTER is: \d{4,6}",
        ));
}

#[test]
fn json_output_numbers_priorities() {
    let output = smsid_cmd()
        .args(["services", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let services = json.as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["priority"], 1);
    assert_eq!(services[0]["name"], "UniPin");
    assert_eq!(services[1]["priority"], 2);
    assert_eq!(services[1]["name"], "ROOTER");
}
