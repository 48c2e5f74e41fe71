//! Incremental HTTP/1.1 Request Parser
//!
//! Bytes arriving in arbitrary sized chunks are fed to a [`Request`] state machine, which
//! reconstructs the request line and header block without requiring the full message up front.
//!
//! - [`h1::parser`] contains the request line and header line parsers.
//! - [`request`] contains the state machine driving both parsers.
//! - [`h1::driver`] bridges a blocking or async byte source to the state machine.
//!
//! ```rust
//! use h1req::h1::driver::read_request;
//!
//! let mut io = &b"GET /path HTTP/1.1\r\nHost: a\r\n\r\n"[..];
//! let req = read_request(&mut io).unwrap();
//!
//! assert_eq!(req.method(), "GET");
//! assert_eq!(req.target(), "/path");
//! assert_eq!(req.http_version(), "1.1");
//! assert_eq!(req.headers().get("Host"), Some("a"));
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod common;
pub mod http;
pub mod headers;
pub mod h1;
pub mod request;

pub use request::{ParseState, Request, RequestLine};
