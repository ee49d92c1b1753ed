use std::io;

use thiserror::Error;

/// A header provider could not name a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("field index {index} out of range for header with {len} names")]
    OutOfRange { index: usize, len: usize },

    #[error("no header name mapped for field index {index}")]
    MissingKey { index: usize },
}

impl HeaderError {
    /// Zero-based index of the field that had no name.
    pub fn index(&self) -> usize {
        match self {
            HeaderError::OutOfRange { index, .. } | HeaderError::MissingKey { index } => *index,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Header {
        line: usize,
        #[source]
        source: HeaderError,
    },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The header failure behind this error, if there is one.
    pub fn header_error(&self) -> Option<&HeaderError> {
        match self {
            Error::Header { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
