extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] hashgen::Error),

    #[error("{0}")]
    Config(#[from] hashgen::error::ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Task Error: {0}")]
    Task(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("Directory Error: `{}`: {kind}", path.display())]
    Directory { path: PathBuf, kind: io::ErrorKind },

    #[error("File Error: `{}`: {kind}", path.display())]
    File { path: PathBuf, kind: io::ErrorKind },
}

impl IoError {
    pub fn directory<P: Into<PathBuf>>(path: P, error: &io::Error) -> Self {
        IoError::Directory {
            path: path.into(),
            kind: error.kind(),
        }
    }

    pub fn file<P: Into<PathBuf>>(path: P, error: &io::Error) -> Self {
        IoError::File {
            path: path.into(),
            kind: error.kind(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Serialization(value.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Error::Task(value.to_string())
    }
}
