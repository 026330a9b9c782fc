use std::string::FromUtf8Error;

use stegohide_core::StegoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Stego(#[from] StegoError),

    /// Unveiled data that cannot be printed to the terminal.
    #[error("Unveiled data is not text, use --out to write it to a file")]
    BinaryPayload(#[source] FromUtf8Error),
}

impl CliError {
    /// Binary payloads get a hint towards `--out`, all other errors stay as they are.
    pub fn from_unveil(e: StegoError) -> Self {
        match e {
            StegoError::InvalidTextData(source) => CliError::BinaryPayload(source),
            e => CliError::Stego(e),
        }
    }
}
