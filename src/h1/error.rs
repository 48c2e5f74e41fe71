use std::{fmt, io};

use crate::h1::parser::ParseError;

/// An error that can occur while reading a request from a byte source.
#[derive(Debug)]
pub enum ReadError {
    /// Request grammar violation.
    Parse(ParseError),
    /// End of stream reached before the header block is terminated.
    Incomplete,
    /// Read buffer reached its configured maximum capacity.
    TooLarge,
    /// Error from the underlying byte source, as returned by the source.
    Io(io::Error),
}

impl ReadError {
    /// Returns `true` if end of stream reached before the request is complete.
    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    /// Returns the parse error, if this error is caused by one.
    #[inline]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Incomplete | Self::TooLarge => None,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "parse error: {err}"),
            Self::Incomplete => f.write_str("incomplete request before end of stream"),
            Self::TooLarge => f.write_str("request head exceeds read buffer capacity"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl From<ParseError> for ReadError {
    fn from(v: ParseError) -> Self {
        Self::Parse(v)
    }
}

impl From<io::Error> for ReadError {
    fn from(v: io::Error) -> Self {
        Self::Io(v)
    }
}
