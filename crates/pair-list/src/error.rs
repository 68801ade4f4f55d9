//! Error types for pair list parsing.

use std::{io, path::PathBuf, result};

/// Errors that can occur while loading a pair list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `Headline + Body` or `Name|URL`, got {content:?}")]
    Syntax { line: usize, content: String },

    #[error("line {line}: empty font name")]
    EmptyName { line: usize },

    #[error("line {line}: empty source URL")]
    EmptyUrl { line: usize },

    #[error("line {line}: font '{name}' is already declared with a different URL")]
    ConflictingDeclaration { name: String, line: usize },

    #[error("line {line}: font '{name}' is used in a pairing but never declared")]
    UndeclaredFont { name: String, line: usize },
}

impl Error {
    /// Line number (1-based) the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io { .. } => None,
            Error::Syntax { line, .. }
            | Error::EmptyName { line }
            | Error::EmptyUrl { line }
            | Error::ConflictingDeclaration { line, .. }
            | Error::UndeclaredFont { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
