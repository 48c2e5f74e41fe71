//! HTTP Protocol.
mod version;

pub use version::Version;
