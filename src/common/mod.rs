//! Shared parsing primitives.

/// Result of a single chunked parse step.
///
/// `Pending` is not an error, it signals that the bytes seen so far are valid but do not yet
/// contain a complete line, so no bytes were consumed.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Convert to `Result<Option<T>, E>`, where `Pending` maps to `Ok(None)`.
    ///
    /// This allows `?` propagation of the error while still branching on pending.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            ParseResult::Pending => Ok(None),
            ParseResult::Ok(ok) => Ok(Some(ok)),
            ParseResult::Err(err) => Err(err),
        }
    }
}
