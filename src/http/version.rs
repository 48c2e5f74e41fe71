/// HTTP Version.
///
/// Only `HTTP/1.1` is representable, any other version is rejected while parsing the request line.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version(Inner);

#[derive(PartialEq, PartialOrd, Copy, Clone, Eq, Ord, Hash)]
enum Inner {
    Http11,
}

impl Version {
    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// The mandatory prefix of the version token in a request line.
    pub const PREFIX: &'static [u8] = b"HTTP/";

    /// Returns version from the part after `HTTP/`, e.g: `1.1`.
    #[inline]
    pub fn from_number(bytes: &[u8]) -> Option<Version> {
        match bytes {
            b"1.1" => Some(Version::HTTP_11),
            _ => None,
        }
    }

    /// Returns string representation of HTTP version, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "HTTP/1.1",
        }
    }

    /// Returns the version number without the `HTTP/` prefix, e.g: `1.1`
    #[inline]
    pub const fn number(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "1.1",
        }
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
