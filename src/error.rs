//! Error types for lwdom

use std::{fmt, io};
use thiserror::Error;

/// What an identifier was about to be used as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierUsage {
    ElementName,
    AttributeName,
}

impl fmt::Display for IdentifierUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementName => write!(f, "element name"),
            Self::AttributeName => write!(f, "attribute name"),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidIdentifier {
        name: String,
        usage: IdentifierUsage,
    },
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    EmptyChildren,
    Io(io::ErrorKind),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier { name, usage } => {
                write!(f, "{name:?} is not a valid {usage}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} children")
            }
            Self::EmptyChildren => write!(f, "element has no children"),
            Self::Io(kind) => write!(f, "i/o failure: {kind}"),
        }
    }
}

/// Main error type for lwdom
#[derive(Error, Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<io::Error>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            source: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn invalid_identifier(name: &str, usage: IdentifierUsage) -> Self {
        Self::new(ErrorKind::InvalidIdentifier {
            name: name.to_string(),
            usage,
        })
    }

    /// Wrap an I/O failure, keeping the original error as the source
    pub(crate) fn io(context: impl fmt::Display, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(source.kind()),
            message: format!("{context}: {source}"),
            source: Some(source),
        }
    }

    /// Prefixes the message with `context`, keeping the kind and source
    pub(crate) fn context(mut self, context: impl fmt::Display) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::io("write failed", err)
    }
}

/// Result type alias for lwdom
pub type Result<T> = std::result::Result<T, Error>;
