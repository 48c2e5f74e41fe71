use super::ParseError;
use crate::{common::ParseResult, http::Version, matches};

/// HTTP Request Line.
///
/// Method, target and version are always populated together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    version: Version,
}

impl RequestLine {
    /// Returns the request method, e.g: `GET`.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the request target as sent, e.g: `/index.html`.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the HTTP version.
    #[inline]
    pub const fn version(&self) -> Version {
        self.version
    }
}

// ===== Request Line =====

/// Parse request line.
///
/// On success, returns the parsed [`RequestLine`] and the number of bytes consumed including the
/// trailing `\r\n`.
///
/// This function performs a chunked parsing, see [module level documentation] for more details.
///
/// [module level documentation]: crate::h1::parser
pub fn parse_reqline_chunk(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    use ParseResult as Result;

    let Some(crlf) = matches::find_crlf(bytes) else {
        return Result::Pending;
    };

    let mut parts = bytes[..crlf].split(|b| *b == b' ');

    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Result::Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || !method.iter().all(|b| matches::is_method(*b)) {
        return Result::Err(ParseError::InvalidMethod);
    }

    if target.is_empty() || target.iter().any(u8::is_ascii_whitespace) {
        return Result::Err(ParseError::MalformedRequestLine);
    }

    let Some(number) = version.strip_prefix(Version::PREFIX) else {
        return Result::Err(ParseError::InvalidVersionPrefix);
    };

    let Some(version) = Version::from_number(number) else {
        let number = String::from_utf8_lossy(number).into_owned();
        return Result::Err(ParseError::UnsupportedVersion(number));
    };

    let reqline = RequestLine {
        // method is uppercase ALPHA only
        method: method.iter().map(|b| *b as char).collect(),
        target: String::from_utf8_lossy(target).into_owned(),
        version,
    };

    Result::Ok((reqline, crlf + 2))
}
