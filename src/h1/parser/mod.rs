//! HTTP/1.1 Parser.
//!
//! [`parse_reqline_chunk`] works on chunked bytes, given any length of bytes, the parser will find
//! the first `\r\n` and parse the line before it. If `\r\n` is not found, then the parser returns
//! [`ParseResult::Pending`], where more bytes is required to complete parsing.
//!
//! [`parse_header_chunk`] works the same way. Additionally, if the parser encounter an empty line,
//! it returns [`Advance`] with `done` set, denoting that its the end of header fields.
//!
//! Neither parser holds state between calls, the caller is responsible to skip consumed bytes.
//!
//! [`ParseResult::Pending`]: crate::common::ParseResult::Pending
mod error;
mod header;
mod request;

pub use error::ParseError;
pub use header::{Advance, parse_header_chunk};
pub use request::{RequestLine, parse_reqline_chunk};
