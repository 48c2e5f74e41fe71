//! HTTP Header Map.
mod error;
mod map;

pub use error::HeaderError;
pub use map::{HeaderMap, Iter};
pub(crate) use map::validate_name;

#[cfg(test)]
mod test;
