/// HTTP Parsing error.
///
/// All errors are terminal for the current request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not consist of exactly three space separated parts.
    MalformedRequestLine,
    /// Method is empty or contains byte other than uppercase ALPHA.
    InvalidMethod,
    /// Version does not start with `HTTP/`.
    InvalidVersionPrefix,
    /// Version other than `1.1`, contains the rejected version.
    UnsupportedVersion(String),
    /// Header line have no colon.
    MalformedHeaderLine,
    /// Header line have whitespace between field name and colon.
    InvalidHeaderSpacing,
    /// Header line have empty field name.
    EmptyHeaderKey,
    /// Field name contains byte outside of `tchar`, contains the offending byte.
    InvalidHeaderCharacter(u8),
    /// Parsing is requested after the request is complete.
    ParserAlreadyDone,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedRequestLine => f.write_str("malformed request line"),
            Self::InvalidMethod => f.write_str("invalid method"),
            Self::InvalidVersionPrefix => f.write_str("invalid version prefix"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported http version: {v}"),
            Self::MalformedHeaderLine => f.write_str("malformed header line, missing colon"),
            Self::InvalidHeaderSpacing => f.write_str("invalid whitespace before header colon"),
            Self::EmptyHeaderKey => f.write_str("empty header name"),
            Self::InvalidHeaderCharacter(b) => {
                write!(f, "invalid header name character: `{}`", b.escape_ascii())
            }
            Self::ParserAlreadyDone => f.write_str("request parsing already done"),
        }
    }
}

impl From<crate::headers::HeaderError> for ParseError {
    fn from(value: crate::headers::HeaderError) -> Self {
        use crate::headers::HeaderError as Error;
        match value {
            Error::Empty => Self::EmptyHeaderKey,
            Error::Invalid(byte) => Self::InvalidHeaderCharacter(byte),
            Error::InvalidValue(_) => Self::MalformedHeaderLine,
        }
    }
}
