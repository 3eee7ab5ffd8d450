//! Crate-level error type covering every pipeline stage.

use thiserror::Error;

use crate::feed::ParseError;
use crate::fetcher::FetchError;
use crate::source::InputError;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing the summary to the output failed
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl Error {
    /// Process exit status used when strict exit codes are enabled.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Input(_) => 2,
            Error::Fetch(FetchError::Transport(_)) => 3,
            Error::Fetch(FetchError::Status(_)) => 4,
            Error::Parse(_) => 5,
            Error::Output(_) => 6,
            // EX_CONFIG from sysexits.h
            Error::Config(_) => 78,
        }
    }
}
