// SPDX-License-Identifier: Unlicense
use thiserror::Error;

use crate::source::{Kind, Position, Token, View};

/// Failure to classify input characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("{position}: unknown character {ch:?}")]
    UnknownCharacter { ch: char, position: Position },
}

/// Input that tokenizes but does not form a valid tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("{position}: expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
        position: Position,
    },

    /// Raised when a literal is converted, which happens at evaluation time.
    #[error("{position}: malformed numeric literal {text:?}")]
    MalformedLiteral { text: String, position: Position },
}

impl SyntaxError {
    pub fn expected<K: Kind>(expected: &'static str, found: &Token<'_, K>) -> Self {
        Self::Expected {
            expected,
            found: found.describe(),
            position: found.view.position(),
        }
    }

    pub fn malformed_literal(view: &View<'_>) -> Self {
        Self::MalformedLiteral {
            text: view.as_str().to_string(),
            position: view.position(),
        }
    }
}

/// The inner error is part of the message and is not exposed as `source()`,
/// so an alternate-format chain prints it once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(LexError),

    #[error("syntax error: {0}")]
    Syntax(SyntaxError),

    #[error("node handle does not belong to this arena")]
    ForeignHandle,
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
