//! Behavioral tests for `smsid detect`.
//!
//! - Reference messages and their service names
//! - Reading stdin whole or line by line
//! - JSON output and its order

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn detects_unipin() {
    smsid_cmd()
        .args(["detect", UNIPIN_MESSAGE])
        .assert()
        .success()
        .stdout("UniPin\n");
}

#[test]
fn detects_rooter() {
    smsid_cmd()
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout("ROOTER\n");
}

#[test]
fn short_code_is_not_found() {
    smsid_cmd()
        .args(["detect", SHORT_ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout("Not found\n");
}

#[test]
fn unrelated_text_is_not_found_and_still_succeeds() {
    smsid_cmd()
        .args(["detect", "Random message"])
        .assert()
        .success()
        .stdout("Not found\n");
}

#[test]
fn multiple_arguments_print_in_input_order() {
    smsid_cmd()
        .args([
            "detect",
            ROOTER_MESSAGE,
            "Random message",
            UNIPIN_MESSAGE,
            SHORT_ROOTER_MESSAGE,
        ])
        .assert()
        .success()
        .stdout("ROOTER\nNot found\nUniPin\nNot found\n");
}

#[test]
fn stdin_is_one_message_by_default() {
    smsid_cmd()
        .arg("detect")
        .write_stdin(format!("{ROOTER_MESSAGE}\nsecond line\n"))
        .assert()
        .success()
        .stdout("ROOTER\n");
}

#[test]
fn each_line_classifies_stdin_lines_separately() {
    smsid_cmd()
        .args(["detect", "--each-line"])
        .write_stdin(format!(
            "{ROOTER_MESSAGE}\n\nRandom message\n{UNIPIN_MESSAGE}\n"
        ))
        .assert()
        .success()
        .stdout("ROOTER\nNot found\nUniPin\n");
}

#[test]
fn empty_stdin_is_not_found() {
    smsid_cmd()
        .arg("detect")
        .write_stdin("")
        .assert()
        .success()
        .stdout("Not found\n");
}

#[test]
fn no_color_output_has_no_escape_codes() {
    smsid_cmd()
        .env("NO_COLOR", "1")
        .args(["detect", ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn forced_color_wraps_service_name() {
    smsid_cmd()
        .args(["detect", "--color", ROOTER_MESSAGE])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["))
        .stdout(predicates::str::contains("ROOTER"));
}

#[test]
fn json_output_lists_every_message() {
    let output = smsid_cmd()
        .args(["detect", "-o", "json", UNIPIN_MESSAGE, "Random message"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["message"], UNIPIN_MESSAGE);
    assert_eq!(results[0]["service"], "UniPin");
    assert_eq!(results[0]["matched"], true);

    assert_eq!(results[1]["message"], "Random message");
    assert_eq!(results[1]["service"], "Not found");
    assert_eq!(results[1]["matched"], false);
}

#[test]
fn json_output_preserves_order_for_many_messages() {
    let messages: Vec<String> = (0..64)
        .map(|i| {
            if i % 3 == 0 {
                format!("Your OTP for login at ROOTER is: {:04}", 1000 + i)
            } else {
                format!("message number {i}")
            }
        })
        .collect();

    let output = smsid_cmd()
        .args(["detect", "--output", "json"])
        .args(&messages)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), messages.len());
    for (i, (result, message)) in results.iter().zip(&messages).enumerate() {
        assert_eq!(result["message"], message.as_str());
        let expected = if i % 3 == 0 { "ROOTER" } else { "Not found" };
        assert_eq!(result["service"], expected, "message {i}");
    }
}
