use std::str::from_utf8;

use crate::zapdesk_tests::zapdesk;

const ALICE_1000: &str = "lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mf09emk2mrv944kummhdchkcmn4wfk8qtmpd35kxeflv9kk7atwws7nzvpsxqcrqvqshuz0r";

#[test]
fn lnurl() {
    let output = zapdesk(&["lnurl", "alice@example.com", "--amount", "1000"], None);
    assert!(output.status.success());
    assert_eq!(from_utf8(&output.stdout).unwrap(), format!("{ALICE_1000}\n"));
}

#[test]
fn lnurl_from_stdin() {
    let output = zapdesk(
        &["lnurl", "-", "--amount", "1000"],
        Some("alice@example.com\n"),
    );
    assert!(output.status.success());
    assert_eq!(from_utf8(&output.stdout).unwrap(), format!("{ALICE_1000}\n"));
}

#[test]
fn lnurl_with_qr() {
    let output = zapdesk(
        &["lnurl", "alice@example.com", "--amount", "1000", "--qr"],
        None,
    );
    assert!(output.status.success());
    let stdout = from_utf8(&output.stdout).unwrap();
    assert!(stdout.starts_with(ALICE_1000));
    assert!(stdout.lines().count() > 10);
}

#[test]
fn invalid_address() {
    let output = zapdesk(&["lnurl", "no-at-sign", "--amount", "100"], None);
    assert!(!output.status.success());
    let stderr = from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("Invalid Lightning Address 'no-at-sign'"));
}

#[test]
fn decode_roundtrip() {
    let output = zapdesk(&["decode", "-"], Some(&ALICE_1000.to_ascii_uppercase()));
    assert!(output.status.success());
    assert_eq!(
        from_utf8(&output.stdout).unwrap(),
        "https://example.com/.well-known/lnurlp/alice?amount=1000000\n"
    );
}

#[test]
fn uri() {
    let output = zapdesk(&["uri", "bob@example.com", "-a", "500"], None);
    assert!(output.status.success());
    assert_eq!(
        from_utf8(&output.stdout).unwrap(),
        "lightning:bob@example.com?amount=500sat\n"
    );
}

#[test]
fn invoice_url_from_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        &file,
        r#"{"callback":"https://example.com/pay/alice?x=1","minSendable":1000,"maxSendable":2000000,"tag":"payRequest"}"#,
    )
    .unwrap();
    let path = file.path().display().to_string();

    let output = zapdesk(&["invoice-url", &path, "--amount", "1000"], None);
    assert!(output.status.success());
    assert_eq!(
        from_utf8(&output.stdout).unwrap(),
        "https://example.com/pay/alice?x=1&amount=1000000\n"
    );

    let output = zapdesk(&["invoice-url", &path, "--amount", "5000"], None);
    assert!(!output.status.success());
    let stderr = from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("outside the sendable range"));
}
