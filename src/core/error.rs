//! Centralised error types used across the crate.

use std::{fmt, io};

use thiserror::Error;

use crate::core::{constants::MAX_PERC_WIDTH, data::ParseCsvError};

/// Which declarative document failed to decode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Document {
    Config,
    Data,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Config => f.write_str("configuration"),
            Document::Data => f.write_str("data"),
        }
    }
}

/// A configuration or data document is not well-formed.
#[derive(Debug, Error)]
#[error("malformed {format} {document} document: {message}")]
pub struct ParseError {
    pub document: Document,
    pub format: &'static str,
    pub message: String,
}

/// A recognised field holds a value outside its legal domain.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("percwidth must be in 1..={max}, got {0}", max = MAX_PERC_WIDTH)]
    PercWidthOutOfRange(i64),
}

/// Errors surfaced while building or mutating a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error type bubbled up by the command line front end.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Csv(#[from] ParseCsvError),

    #[error("{0}")]
    Chart(#[from] ChartError),

    #[error("failed to read {path}: {source}")]
    ReadDocument {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl From<ValidationError> for GraphError {
    fn from(e: ValidationError) -> Self {
        Self::Chart(e.into())
    }
}
