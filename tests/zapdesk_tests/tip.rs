use std::str::from_utf8;

use crate::zapdesk_tests::{zapdesk, zapdesk_with_env};

#[test]
fn tip_presets_spanish() {
    let output = zapdesk(
        &["tip", "alice@example.com", "--agent-name", "Alice", "-l", "es-MX"],
        None,
    );
    assert!(output.status.success());
    let stdout = from_utf8(&output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Dale una propina en sats a Alice");
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("10000 sats: lnurl1"));
}

#[test]
fn tip_without_address() {
    let output = zapdesk(&["tip", "--amount", "100"], None);
    assert!(!output.status.success());
    let stderr = from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("No Lightning Address found for the agent."));
}

#[test]
fn private_comment() {
    let output = zapdesk(
        &[
            "comment",
            "--amount",
            "100",
            "--agent-name",
            "Alice",
            "--address",
            "alice@example.com",
            "--message",
            "thanks!",
            "--private-comments",
        ],
        None,
    );
    assert!(output.status.success());
    let stdout = from_utf8(&output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout).unwrap();
    assert_eq!(json["ticket"]["comment"]["public"], false);
    assert_eq!(
        json["ticket"]["comment"]["body"],
        "Tip: 100 sats\nAgent: Alice\nMessage: thanks!\nLightning Address: alice@example.com"
    );
}

#[test]
fn assignee_file_over_env_address() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        &file,
        r#"{"user":{"id":3,"name":"Bob","user_fields":{"lightning_address":"bob@example.com"}}}"#,
    )
    .unwrap();
    let path = file.path().display().to_string();

    let output = zapdesk_with_env(
        &["tip", "--assignee-file", &path, "--amount", "1000"],
        None,
        &[("ZAPDESK_LIGHTNING_ADDRESS", "carol@example.com")],
    );
    assert!(output.status.success(), "{:?}", output);
    let stdout = from_utf8(&output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Tip Bob with sats");

    let output = zapdesk(&["decode", lines[2]], None);
    assert_eq!(
        from_utf8(&output.stdout).unwrap(),
        "https://example.com/.well-known/lnurlp/bob?amount=1000000\n"
    );
}

#[test]
fn localized_comment_errors() {
    let output = zapdesk_with_env(
        &["comment", "--amount", "0", "--agent-name", "Alice"],
        None,
        &[
            ("ZAPDESK_LIGHTNING_ADDRESS", "alice@example.com"),
            ("ZAPDESK_LOCALE", "es"),
        ],
    );
    assert!(!output.status.success());
    let stderr = from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("No se seleccionó un monto de propina"));
}
