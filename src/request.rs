//! HTTP Request.
use crate::common::ParseResult;
use crate::h1::parser::{ParseError, parse_header_chunk, parse_reqline_chunk};
use crate::headers::HeaderMap;
use crate::log::debug;

pub use crate::h1::parser::RequestLine;

/// Request parsing lifecycle.
///
/// Transitions only move forward, one state at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting for a complete request line.
    #[default]
    ParsingRequestLine,
    /// Request line is parsed, waiting for header lines or the empty line.
    ParsingHeaders,
    /// Header block is terminated, the request is complete.
    Done,
}

/// HTTP Request.
///
/// Created empty, then fed bytes via [`Request::advance`] until its state is [`ParseState::Done`].
#[derive(Debug, Default)]
pub struct Request {
    line: Option<RequestLine>,
    headers: HeaderMap,
    state: ParseState,
}

impl Request {
    /// Create new empty [`Request`] in [`ParseState::ParsingRequestLine`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current parsing state.
    #[inline]
    pub const fn state(&self) -> ParseState {
        self.state
    }

    /// Returns `true` if the request is complete.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// Returns the request line, `None` if it is not parsed yet.
    #[inline]
    pub const fn request_line(&self) -> Option<&RequestLine> {
        self.line.as_ref()
    }

    /// Returns the request method, empty if the request line is not parsed yet.
    #[inline]
    pub fn method(&self) -> &str {
        self.line.as_ref().map_or("", RequestLine::method)
    }

    /// Returns the request target, empty if the request line is not parsed yet.
    #[inline]
    pub fn target(&self) -> &str {
        self.line.as_ref().map_or("", RequestLine::target)
    }

    /// Returns the version number, e.g: `1.1`, empty if the request line is not parsed yet.
    #[inline]
    pub fn http_version(&self) -> &'static str {
        self.line.as_ref().map_or("", |line| line.version().number())
    }

    /// Returns the header map.
    #[inline]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Consume the request, returning its parts.
    ///
    /// Returns `None` for the request line if it is not parsed yet.
    #[inline]
    pub fn into_parts(self) -> (Option<RequestLine>, HeaderMap) {
        (self.line, self.headers)
    }

    /// Parse as many complete lines from `bytes` as possible.
    ///
    /// Returns the total number of bytes consumed, which the caller must discard before the next
    /// call. Returning less than `bytes.len()` without error means more bytes are required to
    /// complete the next line, or the request is complete.
    ///
    /// Any error is terminal, bytes consumed before the error are not reported.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ParserAlreadyDone`] when called after the request is complete, or any
    /// grammar error from the request line or header parser.
    pub fn advance(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        if self.is_done() {
            return Err(ParseError::ParserAlreadyDone);
        }

        let mut total = 0;

        while !self.is_done() && total < bytes.len() {
            let read = self.advance_line(&bytes[total..])?;
            if read == 0 {
                break;
            }
            total += read;
        }

        Ok(total)
    }

    fn advance_line(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParseState::ParsingRequestLine => {
                let Some((line, read)) = parse_reqline_chunk(bytes).into_result()? else {
                    return Ok(0);
                };
                debug!("request line: {} {} {}", line.method(), line.target(), line.version());
                self.line = Some(line);
                self.state = ParseState::ParsingHeaders;
                Ok(read)
            }
            ParseState::ParsingHeaders => match parse_header_chunk(&mut self.headers, bytes) {
                ParseResult::Pending => Ok(0),
                ParseResult::Ok(adv) => {
                    if adv.done {
                        debug!("request complete with {} header(s)", self.headers.len());
                        self.state = ParseState::Done;
                    }
                    Ok(adv.consumed)
                }
                ParseResult::Err(err) => Err(err),
            },
            ParseState::Done => Err(ParseError::ParserAlreadyDone),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ParseState, Request};
    use crate::h1::parser::ParseError;

    const INPUT: &[u8] = b"GET /path HTTP/1.1\r\nHost: a\r\nAccept: */*\r\n\r\n";

    #[test]
    fn test_advance_single_call() {
        let mut req = Request::new();
        assert_eq!(req.state(), ParseState::ParsingRequestLine);

        assert_eq!(req.advance(INPUT), Ok(INPUT.len()));
        assert_eq!(req.state(), ParseState::Done);
        assert_eq!(req.method(), "GET");
        assert_eq!(req.target(), "/path");
        assert_eq!(req.http_version(), "1.1");
        assert_eq!(req.headers().get("host"), Some("a"));
        assert_eq!(req.headers().get("accept"), Some("*/*"));
        assert_eq!(req.headers().len(), 2);
    }

    #[test]
    fn test_advance_states() {
        let mut req = Request::new();

        assert_eq!(req.advance(b"GET / HTTP/1.1\r\nHo"), Ok(16));
        assert_eq!(req.state(), ParseState::ParsingHeaders);
        assert_eq!(req.method(), "GET");

        assert_eq!(req.advance(b"Ho"), Ok(0));
        assert_eq!(req.state(), ParseState::ParsingHeaders);

        assert_eq!(req.advance(b"Host: a\r\n"), Ok(9));
        assert_eq!(req.state(), ParseState::ParsingHeaders);

        assert_eq!(req.advance(b"\r\n"), Ok(2));
        assert_eq!(req.state(), ParseState::Done);
    }

    #[test]
    fn test_advance_stops_at_done() {
        let mut req = Request::new();
        let input = b"GET / HTTP/1.1\r\n\r\nbody";

        assert_eq!(req.advance(input), Ok(input.len() - 4));
        assert!(req.is_done());
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_advance_pending() {
        let mut req = Request::new();
        assert_eq!(req.advance(b""), Ok(0));
        assert_eq!(req.advance(b"GET / HTTP/1.1"), Ok(0));
        assert_eq!(req.state(), ParseState::ParsingRequestLine);
        assert!(req.request_line().is_none());
        assert_eq!(req.method(), "");
    }

    #[test]
    fn test_advance_already_done() {
        let mut req = Request::new();
        req.advance(INPUT).unwrap();

        assert_eq!(req.advance(INPUT), Err(ParseError::ParserAlreadyDone));
        assert_eq!(req.advance(b""), Err(ParseError::ParserAlreadyDone));
    }

    #[test]
    fn test_advance_error() {
        let mut req = Request::new();
        assert_eq!(
            req.advance(b"GET / HTTP/2.0\r\n"),
            Err(ParseError::UnsupportedVersion("2.0".into()))
        );

        let mut req = Request::new();
        assert_eq!(
            req.advance(b"GET / HTTP/1.1\r\nHost : a\r\n\r\n"),
            Err(ParseError::InvalidHeaderSpacing)
        );
        assert_eq!(req.state(), ParseState::ParsingHeaders);
    }

    #[test]
    fn test_into_parts() {
        let mut req = Request::new();
        req.advance(INPUT).unwrap();

        let (line, headers) = req.into_parts();
        let line = line.unwrap();
        assert_eq!(line.method(), "GET");
        assert_eq!(line.target(), "/path");
        assert_eq!(headers.get("accept"), Some("*/*"));

        let (line, headers) = Request::new().into_parts();
        assert!(line.is_none());
        assert!(headers.is_empty());
    }

    #[test]
    fn test_advance_byte_by_byte() {
        let mut whole = Request::new();
        whole.advance(INPUT).unwrap();

        let mut req = Request::new();
        let mut start = 0;

        for end in 1..=INPUT.len() {
            start += req.advance(&INPUT[start..end]).unwrap();
            if req.is_done() {
                break;
            }
        }

        assert_eq!(start, INPUT.len());
        assert_eq!(req.request_line(), whole.request_line());
        assert_eq!(req.headers(), whole.headers());
    }
}
