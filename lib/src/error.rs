extern crate thiserror;

use std::str::Utf8Error;

use thiserror::Error;

use crate::document::DocumentId;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Decode Error: document `{document}` is not valid UTF-8: {source}")]
    Decode {
        document: DocumentId,
        #[source]
        source: Utf8Error,
    },

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Worker Error: {0}")]
    Worker(String),
}

impl Error {
    /// Document the error is attributed to, if any.
    pub fn document(&self) -> Option<&DocumentId> {
        match self {
            Error::Decode { document, .. } => Some(document),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Selection Error: {0}")]
    Selection(String),

    #[error("Frequency Error: unknown measure `{0}`")]
    Frequency(String),

    #[error("Policy Error: unknown policy `{0}`")]
    Policy(String),

    #[error("Extension Error: {0}")]
    Extension(String),
}

/// Per-token classification failure. Never fatal, the token is dropped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Classification Error: token `{0}` has no word characters")]
    NoWordCharacters(String),

    #[error("Classification Error: token `{0}` contains undecodable characters")]
    Garbled(String),
}
