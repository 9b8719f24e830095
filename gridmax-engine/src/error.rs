//! Gridmax Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Gridmax Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for Gridmax engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Move text is not exactly `<file><rank><file><rank>` with files a-h and ranks 1-8.
    InvalidMoveFormat,
    /// Piece parse char is not in KQRBNPkqrbnp.
    ParsePieceMalformed,
    /// Board layout string does not describe exactly 64 cells.
    BoardMalformed,

    // A move was rejected by the legality gate and could not be applied.
    IllegalMove,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMoveFormat => "invalid move format",
            ErrorKind::ParsePieceMalformed => "parse piece malformed",
            ErrorKind::BoardMalformed => "board malformed",

            ErrorKind::IllegalMove => "illegal move",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Gridmax Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error, regardless of any attached context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_survives_context() {
        let simple = Error::from(ErrorKind::IllegalMove);
        let message = Error::from((ErrorKind::InvalidMoveFormat, "too short"));
        let custom = Error::new(ErrorKind::BoardMalformed, "63 cells");

        assert_eq!(simple.kind(), ErrorKind::IllegalMove);
        assert_eq!(message.kind(), ErrorKind::InvalidMoveFormat);
        assert_eq!(custom.kind(), ErrorKind::BoardMalformed);
        assert_eq!(message.to_string(), "invalid move format: too short");
    }
}
