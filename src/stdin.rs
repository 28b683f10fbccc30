use std::io::Read;

use crate::commands::Commands;

pub struct StdinData(Vec<u8>);

#[derive(thiserror::Error, Debug)]
pub enum StdinError {
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("One text line expected in stdin, found {0}")]
    Not1Lines(usize),
}

impl StdinData {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }
    pub fn to_single_text_line(self) -> Result<String, StdinError> {
        let mut vec = self.to_multiline_string()?;
        if vec.len() != 1 {
            return Err(StdinError::Not1Lines(vec.len()));
        }
        Ok(vec.pop().expect("length checked"))
    }
    pub fn to_string(self) -> Result<String, StdinError> {
        Ok(String::from_utf8(self.0)?)
    }

    pub fn to_multiline_string(self) -> Result<Vec<String>, StdinError> {
        let string = self.to_string()?;
        Ok(string
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

impl AsRef<[u8]> for StdinData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

pub fn read_stdin() -> Result<StdinData, std::io::Error> {
    let mut stdin = std::io::stdin().lock();
    let mut result = vec![];
    stdin.read_to_end(&mut result)?;
    Ok(StdinData(result))
}

/// The argument value meaning "read from standard input"
pub const STDIN_ARG: &str = "-";

impl Commands {
    pub fn needs_stdin(&self) -> bool {
        match self {
            Commands::Lnurl { address, .. }
            | Commands::Uri { address, .. }
            | Commands::Comment { address, .. } => address == STDIN_ARG,
            Commands::Decode { lnurl } => lnurl == STDIN_ARG,
            Commands::Tip {
                address,
                assignee_file,
                ..
            } => {
                address.as_deref() == Some(STDIN_ARG)
                    || assignee_file
                        .as_deref()
                        .map_or(false, |f| f == std::path::Path::new(STDIN_ARG))
            }
            Commands::InvoiceUrl { file, .. }
            | Commands::Invoice { file }
            | Commands::Qr { file, .. } => file == std::path::Path::new(STDIN_ARG),
            Commands::GenerateCompletion { .. } => false,
        }
    }
}
