//! Error types for namae.
//!
//! Uses `thiserror` for ergonomic error definition. Name text itself never
//! produces an error: an unrecognizable name yields a sparsely-populated
//! record instead. Errors only arise at the edges (argument types, files,
//! the terminal).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for namae operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a lexicon read error for the given path.
    #[must_use]
    pub fn lexicon_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::LexiconRead {
            path: path.into(),
            source,
        })
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An entry point received input that is not a name string.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An explicitly requested lexicon file could not be read.
    #[error("cannot read lexicon {}: {source}", path.display())]
    LexiconRead {
        /// The lexicon path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Reading input files or standard streams failed.
    #[error("i/o error: {0}")]
    Io(io::Error),

    /// The interactive line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Encoding or decoding JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
