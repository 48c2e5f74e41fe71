use std::collections::{HashMap, hash_map};

use super::HeaderError;
use crate::matches;

/// HTTP Headers Map.
///
/// Names are stored in lowercase. Appending a name that already exists combines the values as
/// `"<existing>, <new>"`, the map never overwrites a repeated field.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: HashMap<String, String>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the map contains a header value for given header name.
    ///
    /// Lookup is case-insensitive.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the header value corresponding to the given header name.
    ///
    /// Lookup is case-insensitive.
    ///
    /// ```rust
    /// use h1req::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.append("Content-Type", "text/html").unwrap();
    /// assert_eq!(map.get("content-type"), Some("text/html"));
    /// assert_eq!(map.get("CONTENT-TYPE"), Some("text/html"));
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.fields.get(&name.to_ascii_lowercase())
        } else {
            self.fields.get(name)
        };
        value.map(String::as_str)
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }

    /// Append header field.
    ///
    /// The name is validated against `tchar` and normalized to lowercase. Surrounding whitespace
    /// of `value` is removed. If the name already exists, `value` is joined to the existing value
    /// with `", "`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError`] if the name is not a `token`, or the value contains `\r` or `\n`.
    ///
    /// ```rust
    /// use h1req::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.append("Set-Person", "lane-loves-go").unwrap();
    /// map.append("set-person", "prime-loves-zig").unwrap();
    /// assert_eq!(map.get("set-person"), Some("lane-loves-go, prime-loves-zig"));
    /// ```
    pub fn append(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        validate_name(name.as_bytes())?;
        if let Some(byte) = value.bytes().find(|b| matches!(*b, b'\r' | b'\n')) {
            return Err(HeaderError::InvalidValue(byte));
        }
        let value = value.trim_matches(|c: char| c.is_ascii() && matches::is_space(c as u8));
        self.append_valid(name.to_ascii_lowercase(), value);
        Ok(())
    }

    /// `name` must already be validated and lowercased.
    pub(crate) fn append_valid(&mut self, name: String, value: &str) {
        match self.fields.entry(name) {
            hash_map::Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.reserve(value.len() + 2);
                existing.push_str(", ");
                existing.push_str(value);
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value.to_owned());
            }
        }
    }

    /// Clear the map, removing all values but keeping the allocated memory.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Check that `name` is a non-empty `token`.
pub(crate) fn validate_name(name: &[u8]) -> Result<(), HeaderError> {
    if name.is_empty() {
        return Err(HeaderError::Empty);
    }
    match name.iter().find(|b| !matches::is_token(**b)) {
        Some(byte) => Err(HeaderError::Invalid(*byte)),
        None => Ok(()),
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ===== Iter =====

/// Iterator returned from [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
