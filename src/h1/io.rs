//! HTTP/1.1 IO Buffering.
mod buffer;
mod config;

pub use buffer::ReadBuffer;
pub use config::ReaderConfig;
