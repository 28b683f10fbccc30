use std::io::{stdout, Write};

use clap::Parser;
use zapdesk::{inner_main, stdin::read_stdin, Cli};

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    let cli = Cli::parse();
    let stdin = if cli.command.needs_stdin() {
        match read_stdin() {
            Ok(stdin) => Some(stdin),
            Err(e) => {
                log::error!("cannot read stdin: {e}");
                std::process::exit(1);
            }
        }
    } else {
        None
    };
    match inner_main(cli, stdin) {
        Ok(r) => {
            let mut stdout = stdout().lock();
            if let Err(e) = writeln!(stdout, "{r}") {
                log::error!("cannot write to stdout: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
