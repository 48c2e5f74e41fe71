use super::ParseError;
use crate::{common::ParseResult, headers::HeaderMap, matches};

/// Successful step of header parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Number of bytes consumed, including the trailing `\r\n`.
    pub consumed: usize,
    /// `true` if the consumed line is the empty line ending the header block.
    pub done: bool,
}

impl HeaderMap {
    /// Parse single header line from the start of `bytes` into this map.
    ///
    /// See [`parse_header_chunk`].
    #[inline]
    pub fn parse_line(&mut self, bytes: &[u8]) -> ParseResult<Advance, ParseError> {
        parse_header_chunk(self, bytes)
    }
}

/// Parse header field into `map`.
///
/// Returns [`Advance`] with `done` set when encounter an empty line, in which case exactly 2
/// bytes are consumed. The map is only mutated when a field is successfully parsed.
///
/// This function performs a chunked parsing, see [module level documentation] for more details.
///
/// [module level documentation]: crate::h1::parser
pub fn parse_header_chunk(map: &mut HeaderMap, bytes: &[u8]) -> ParseResult<Advance, ParseError> {
    use ParseResult as Result;

    let Some(crlf) = matches::find_crlf(bytes) else {
        return Result::Pending;
    };

    if crlf == 0 {
        return Result::Ok(Advance {
            consumed: 2,
            done: true,
        });
    }

    let line = matches::trim_space(&bytes[..crlf]);

    let Some(colon) = line.iter().position(|b| *b == b':') else {
        return Result::Err(ParseError::MalformedHeaderLine);
    };

    // field-name ":" without whitespace in between
    if colon > 0 && line[colon - 1] == b' ' {
        return Result::Err(ParseError::InvalidHeaderSpacing);
    }

    let name = matches::trim_space(&line[..colon]);
    let value = matches::trim_space(&line[colon + 1..]);

    if let Err(err) = crate::headers::validate_name(name) {
        return Result::Err(err.into());
    }

    crate::log::trace!(
        "header {:?}: {:?}",
        name.escape_ascii().to_string(),
        value.escape_ascii().to_string()
    );

    // name is `tchar` only, which is ASCII
    let name = name.iter().map(|b| b.to_ascii_lowercase() as char).collect();
    map.append_valid(name, &String::from_utf8_lossy(value));

    Result::Ok(Advance {
        consumed: crlf + 2,
        done: false,
    })
}
