//! Request parse errors
//!
//! A parse error never ends a session. It is a value handed back to the
//! session loop, which reports it and moves on to the next line.

use thiserror::Error;

/// Why a request line could not be split into value and unit names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty request")]
    Empty,

    #[error("Invalid number format: {0}")]
    MalformedNumber(String),

    /// A unit name was expected at `position` but the line ended
    #[error("Missing unit name at token {position}")]
    MissingUnit { position: usize },

    #[error("No 'to' or 'in' between the units")]
    UnresolvedConnector,
}

impl ParseError {
    /// Machine-readable code, used in log events
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Empty => "EMPTY",
            ParseError::MalformedNumber(_) => "MALFORMED_NUMBER",
            ParseError::MissingUnit { .. } => "MISSING_UNIT",
            ParseError::UnresolvedConnector => "UNRESOLVED_CONNECTOR",
        }
    }
}
