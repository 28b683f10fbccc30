use std::str::from_utf8;

use crate::zapdesk_tests::zapdesk;

#[test]
fn help() {
    let output = zapdesk(&["--help"], None);
    assert!(output.status.success());
    let stdout = from_utf8(&output.stdout).unwrap();

    assert!(stdout.starts_with("Usage: zapdesk [OPTIONS] <COMMAND>"));
    assert!(stdout.contains("lnurl"));
}

#[test]
fn missing_command() {
    let output = zapdesk(&[], None);
    assert!(!output.status.success());
}
