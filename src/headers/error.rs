//! Error types that can occur during header related operation.

/// An error that can occur in header related operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header name is empty.
    Empty,
    /// Header name contains a byte outside of `tchar`.
    Invalid(u8),
    /// Header value contains `\r` or `\n`.
    InvalidValue(u8),
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("header name cannot be empty"),
            Self::Invalid(byte) => write!(f, "header name contains invalid byte `{}`", byte.escape_ascii()),
            Self::InvalidValue(byte) => write!(f, "header value contains invalid byte `{}`", byte.escape_ascii()),
        }
    }
}
