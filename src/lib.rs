#![doc = include_str!("../README.md")]

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use commands::{Commands, QR_BORDER};
use error::Error;
use i18n::Translations;
use std::{fs, path::Path, str::from_utf8};
use stdin::{StdinData, STDIN_ARG};
use tip::Assignee;

pub mod codec;
pub mod commands;
pub mod error;
pub mod i18n;
pub mod lnurl;
pub mod pay_request;
pub mod stdin;
pub mod test_util; // pub because needed in doctest
pub mod tip;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Locale of the messages, unsupported locales fall back to english
    #[arg(short, long, env = "ZAPDESK_LOCALE", global = true)]
    #[arg(default_value = i18n::DEFAULT_LOCALE)]
    pub locale: String,
}

/// The argument itself, or a single line from stdin if the argument is `-`
fn arg_or_stdin_line(arg: String, stdin: Option<StdinData>) -> Result<String, Error> {
    if arg == STDIN_ARG {
        Ok(stdin.ok_or(Error::StdinExpected)?.to_single_text_line()?)
    } else {
        Ok(arg)
    }
}

/// The content of the file, or the whole stdin if the file is `-`
fn file_or_stdin(file: &Path, stdin: Option<StdinData>) -> Result<String, Error> {
    if file == Path::new(STDIN_ARG) {
        Ok(stdin.ok_or(Error::StdinExpected)?.to_string()?)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

pub fn inner_main(cli: Cli, stdin: Option<StdinData>) -> Result<String, Error> {
    Ok(match cli.command {
        Commands::Lnurl {
            address,
            amount,
            uppercase,
            qr,
        } => {
            let address = arg_or_stdin_line(address, stdin)?;
            commands::lnurl(&address, amount, uppercase, qr.then_some(QR_BORDER))?
        }
        Commands::Uri { address, amount } => {
            let address = arg_or_stdin_line(address, stdin)?;
            commands::uri(&address, amount)?
        }
        Commands::Decode { lnurl } => {
            let lnurl = arg_or_stdin_line(lnurl, stdin)?;
            commands::decode(&lnurl)?
        }
        Commands::InvoiceUrl { file, amount } => {
            let json = file_or_stdin(&file, stdin)?;
            commands::invoice_url(&json, amount)?
        }
        Commands::Invoice { file } => {
            let json = file_or_stdin(&file, stdin)?;
            commands::invoice(&json)?
        }
        Commands::Tip {
            address,
            assignee_file,
            agent_name,
            amount,
            qr,
        } => {
            let translations = Translations::load(&cli.locale)?;
            // the assignee document wins over an address, which may come from the environment
            let (address, agent_name) = match assignee_file {
                Some(file) => {
                    let assignee = Assignee::from_user_json(&file_or_stdin(&file, stdin)?)?;
                    let name = agent_name.unwrap_or(assignee.name);
                    (assignee.lightning_address, Some(name))
                }
                None => {
                    let address = address.map(|a| arg_or_stdin_line(a, stdin)).transpose()?;
                    (address, agent_name)
                }
            };
            commands::tip(
                &translations,
                address.as_deref(),
                agent_name.as_deref(),
                amount,
                qr.then_some(QR_BORDER),
            )?
        }
        Commands::Comment {
            amount,
            agent_name,
            address,
            message,
            private_comments,
        } => {
            let translations = Translations::load(&cli.locale)?;
            let address = arg_or_stdin_line(address, stdin)?;
            commands::comment(
                &translations,
                amount,
                &agent_name,
                message,
                &address,
                private_comments,
            )?
        }
        Commands::Qr {
            file,
            qr_version,
            border,
            empty_lines,
        } => {
            let file_content = file_or_stdin(&file, stdin)?;
            commands::qr(&file_content, qr_version, border, empty_lines)?
        }
        Commands::GenerateCompletion { shell } => {
            let mut result = vec![];
            generate(shell, &mut Cli::command(), "zapdesk", &mut result);
            from_utf8(&result)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?
                .to_string()
        }
    })
}
