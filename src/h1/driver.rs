//! Read a [`Request`] from a byte source.
//!
//! The driver reads into a [`ReadBuffer`], feeds the filled bytes to the request state machine,
//! and compacts the buffer after each consumption. Reading is the only suspension point.
//!
//! On end of stream, whatever bytes remain are parsed once more, and the request must be
//! complete, a truncated request is never accepted.
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::ReadError;
use super::io::{ReadBuffer, ReaderConfig};
use crate::log::warning;
use crate::request::Request;

/// Read request from blocking byte source with default configuration.
///
/// ```rust
/// use h1req::h1::driver::read_request;
///
/// let mut io = &b"GET / HTTP/1.1\r\nHost: a\r\n"[..];
/// let err = read_request(&mut io).unwrap_err();
/// assert!(err.is_incomplete());
/// ```
///
/// # Errors
///
/// See [`read_request_with`].
#[inline]
pub fn read_request<R: io::Read>(io: R) -> Result<Request, ReadError> {
    read_request_with(io, &ReaderConfig::default())
}

/// Read request from blocking byte source.
///
/// Reads interrupted by a signal are retried.
///
/// # Errors
///
/// - [`ReadError::Parse`] on request grammar violation.
/// - [`ReadError::Incomplete`] if end of stream is reached before the request is complete.
/// - [`ReadError::TooLarge`] if the buffer is full at its configured maximum capacity.
/// - [`ReadError::Io`] on any other read error.
pub fn read_request_with<R: io::Read>(
    mut io: R,
    config: &ReaderConfig,
) -> Result<Request, ReadError> {
    let mut buffer = ReadBuffer::new(config);
    let mut request = Request::new();

    while !request.is_done() {
        buffer.reserve()?;

        let read = match io.read(buffer.unfilled_mut()) {
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };

        if read == 0 {
            return finish(buffer, request);
        }

        buffer.advance_filled(read);
        buffer.parse_into(&mut request)?;
    }

    Ok(request)
}

/// Read request from async byte source with default configuration.
///
/// # Errors
///
/// See [`read_request_async_with`].
#[inline]
pub async fn read_request_async<R>(io: R) -> Result<Request, ReadError>
where
    R: AsyncRead + Unpin,
{
    read_request_async_with(io, &ReaderConfig::default()).await
}

/// Read request from async byte source.
///
/// # Errors
///
/// Same as [`read_request_with`].
pub async fn read_request_async_with<R>(
    mut io: R,
    config: &ReaderConfig,
) -> Result<Request, ReadError>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = ReadBuffer::new(config);
    let mut request = Request::new();

    while !request.is_done() {
        buffer.reserve()?;

        let read = io.read(buffer.unfilled_mut()).await?;

        if read == 0 {
            return finish(buffer, request);
        }

        buffer.advance_filled(read);
        buffer.parse_into(&mut request)?;
    }

    Ok(request)
}

/// Final parse attempt at end of stream.
fn finish(mut buffer: ReadBuffer, mut request: Request) -> Result<Request, ReadError> {
    buffer.parse_into(&mut request)?;

    if !request.is_done() {
        warning!(
            "end of stream in {:?} with {} unconsumed byte(s)",
            request.state(),
            buffer.len()
        );
        return Err(ReadError::Incomplete);
    }

    Ok(request)
}
