use crate::{error::Error, inner_main, stdin::StdinData, Cli};
use clap::Parser;

fn run(stdin: &str, command: &str) -> Result<String, Error> {
    let cli = Cli::try_parse_from(command.split(' ')).unwrap();
    let stdin = cli
        .command
        .needs_stdin()
        .then(|| StdinData::new(stdin.as_bytes().to_vec()));
    inner_main(cli, stdin)
}

/// Emulate the shell by parsing the given command with the clap struct `Cli`.
///
/// Arguments are separated by a single space, so they can't contain spaces.
pub fn sh(stdin: &str, command: &str) -> String {
    run(stdin, command).expect(command)
}

/// Like [`sh`] but for commands expected to fail, returns the error message
pub fn sh_err(stdin: &str, command: &str) -> String {
    match run(stdin, command) {
        Ok(stdout) => panic!("{command} succeeded with {stdout}"),
        Err(e) => e.to_string(),
    }
}
