use std::{
    io::Write,
    process::{Output, Stdio},
};

mod help;
mod lnurl;
mod tip;

fn zapdesk(args: &[&str], stdin_string: Option<&str>) -> Output {
    zapdesk_with_env(args, stdin_string, &[])
}

fn zapdesk_with_env(args: &[&str], stdin_string: Option<&str>, envs: &[(&str, &str)]) -> Output {
    let stdin = stdin_string
        .map(|_| Stdio::piped())
        .unwrap_or(Stdio::null());
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_zapdesk"))
        .args(args)
        .env_remove("ZAPDESK_LIGHTNING_ADDRESS")
        .env_remove("ZAPDESK_LOCALE")
        .env_remove("ZAPDESK_PRIVATE_COMMENTS")
        .envs(envs.iter().copied())
        .stdin(stdin)
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(stdin_string) = stdin_string {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin_string.as_bytes())
            .unwrap();
    }
    child.wait_with_output().unwrap()
}
