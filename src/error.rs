// src/error.rs

use arrow::error::ArrowError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad class of a pipeline failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Schema,
}

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },

    #[error("CSV parse error in {}: missing header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("Schema error: column {column:?} not found (have {available:?})")]
    Schema {
        column: String,
        available: Vec<String>,
    },

    #[error("Schema error: {0}")]
    Arrow(#[from] ArrowError),
}

impl EnrichError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnrichError::Io { .. } => ErrorKind::Io,
            EnrichError::Parse { .. } | EnrichError::MissingHeader { .. } => ErrorKind::Parse,
            EnrichError::Schema { .. } | EnrichError::Arrow(_) => ErrorKind::Schema,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnrichError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
