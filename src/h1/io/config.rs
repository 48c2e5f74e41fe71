/// Read buffer configuration.
///
/// ```rust
/// use h1req::h1::io::ReaderConfig;
///
/// let config = ReaderConfig::new()
///     .initial_capacity(1024)
///     .max_capacity(8 * 1024);
///
/// assert_eq!(config.get_initial_capacity(), 1024);
/// assert_eq!(config.get_max_capacity(), Some(8 * 1024));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    initial_capacity: usize,
    max_capacity: Option<usize>,
}

impl ReaderConfig {
    /// Default initial buffer capacity in bytes.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Create default configuration, the buffer starts at 8 bytes and is unbounded.
    #[inline]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
        }
    }

    /// Set the initial buffer capacity, clamped to at least 1 byte.
    #[inline]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Set the maximum buffer capacity.
    ///
    /// When the buffer is full at this capacity and the request is still incomplete, reading
    /// fails with [`ReadError::TooLarge`].
    ///
    /// [`ReadError::TooLarge`]: crate::h1::ReadError::TooLarge
    #[inline]
    pub const fn max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    /// Returns the initial buffer capacity.
    #[inline]
    pub const fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the maximum buffer capacity, `None` if unbounded.
    #[inline]
    pub const fn get_max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }
}

impl Default for ReaderConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
