use bytes::BytesMut;

use super::ReaderConfig;
use crate::h1::ReadError;
use crate::log::trace;
use crate::request::Request;

/// Growable read buffer.
///
/// A single owned byte region where `[..read_to]` holds bytes read but not yet consumed. The
/// region doubles when full and is compacted to the front after bytes are consumed, so consumed
/// bytes are never scanned twice.
pub struct ReadBuffer {
    buf: BytesMut,
    read_to: usize,
    max_capacity: Option<usize>,
}

impl ReadBuffer {
    /// Create new buffer from given configuration.
    pub fn new(config: &ReaderConfig) -> Self {
        let max_capacity = config.get_max_capacity().map(|max| max.max(1));
        let capacity = match max_capacity {
            Some(max) => config.get_initial_capacity().min(max),
            None => config.get_initial_capacity(),
        };
        Self {
            buf: BytesMut::zeroed(capacity),
            read_to: 0,
            max_capacity,
        }
    }

    /// Returns the current buffer capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.read_to
    }

    /// Returns `true` if there is no unconsumed bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.read_to == 0
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.read_to]
    }

    /// Double the capacity if the buffer is full, preserving existing bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::TooLarge`] if the buffer is full at its maximum capacity.
    pub fn reserve(&mut self) -> Result<(), ReadError> {
        let cap = self.buf.len();
        if self.read_to < cap {
            return Ok(());
        }

        let new_cap = match self.max_capacity {
            Some(max) if cap >= max => return Err(ReadError::TooLarge),
            Some(max) => cap.saturating_mul(2).min(max),
            None => cap.saturating_mul(2),
        };

        trace!("growing read buffer from {cap} to {new_cap} bytes");
        self.buf.resize(new_cap, 0);
        Ok(())
    }

    /// Returns the writable region after the unconsumed bytes.
    ///
    /// Empty when the buffer is full, see [`ReadBuffer::reserve`].
    #[inline]
    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.read_to..]
    }

    /// Mark `read` bytes of [`ReadBuffer::unfilled_mut`] as filled.
    ///
    /// # Panics
    ///
    /// Panics if `read` is larger than the unfilled region.
    #[inline]
    pub fn advance_filled(&mut self, read: usize) {
        assert!(read <= self.buf.len() - self.read_to, "read past buffer capacity");
        self.read_to += read;
    }

    /// Discard the first `consumed` bytes, shifting the rest to the front.
    ///
    /// # Panics
    ///
    /// Panics if `consumed` is larger than [`ReadBuffer::len`].
    pub fn compact(&mut self, consumed: usize) {
        assert!(consumed <= self.read_to, "consumed past filled bytes");
        if consumed == 0 {
            return;
        }
        self.buf.copy_within(consumed..self.read_to, 0);
        self.read_to -= consumed;
    }

    /// Feed unconsumed bytes to `request` until no more complete line is available or the request
    /// is complete, compacting after each step.
    pub(crate) fn parse_into(&mut self, request: &mut Request) -> Result<(), ReadError> {
        while !request.is_done() {
            let consumed = request.advance(self.filled())?;
            if consumed == 0 {
                break;
            }
            self.compact(consumed);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReadBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ReadBuffer")
            .field("read_to", &self.read_to)
            .field("capacity", &self.buf.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::{ReadBuffer, ReaderConfig};
    use crate::h1::ReadError;
    use crate::request::Request;

    fn fill(buffer: &mut ReadBuffer, bytes: &[u8]) {
        buffer.unfilled_mut()[..bytes.len()].copy_from_slice(bytes);
        buffer.advance_filled(bytes.len());
    }

    #[test]
    fn test_grow_preserves_bytes() {
        let mut buffer = ReadBuffer::new(&ReaderConfig::new());
        assert_eq!(buffer.capacity(), 8);

        // not full, no growth
        fill(&mut buffer, b"GET /");
        buffer.reserve().unwrap();
        assert_eq!(buffer.capacity(), 8);

        fill(&mut buffer, b" HT");
        assert!(buffer.unfilled_mut().is_empty());

        buffer.reserve().unwrap();
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.filled(), b"GET / HT");
        assert_eq!(buffer.unfilled_mut().len(), 8);
    }

    #[test]
    fn test_compact() {
        let mut buffer = ReadBuffer::new(&ReaderConfig::new().initial_capacity(16));
        fill(&mut buffer, b"Host: a\r\nAcc");

        buffer.compact(9);
        assert_eq!(buffer.filled(), b"Acc");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 16);

        buffer.compact(0);
        assert_eq!(buffer.filled(), b"Acc");

        buffer.compact(3);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_max_capacity() {
        let config = ReaderConfig::new().initial_capacity(4).max_capacity(6);
        let mut buffer = ReadBuffer::new(&config);

        fill(&mut buffer, b"GET ");
        buffer.reserve().unwrap();
        assert_eq!(buffer.capacity(), 6);

        fill(&mut buffer, b"/a");
        assert!(matches!(buffer.reserve(), Err(ReadError::TooLarge)));
        assert_eq!(buffer.filled(), b"GET /a");
    }

    #[test]
    fn test_parse_into() {
        let mut buffer = ReadBuffer::new(&ReaderConfig::new().initial_capacity(64));
        let mut request = Request::new();

        fill(&mut buffer, b"GET / HTTP/1.1\r\nHost: a\r\nAcc");
        buffer.parse_into(&mut request).unwrap();
        assert_eq!(buffer.filled(), b"Acc");
        assert!(!request.is_done());

        fill(&mut buffer, b"ept: */*\r\n\r\n");
        buffer.parse_into(&mut request).unwrap();
        assert!(buffer.is_empty());
        assert!(request.is_done());
        assert_eq!(request.headers().get("accept"), Some("*/*"));
    }
}
