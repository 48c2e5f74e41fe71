//! HTTP/1.1 Protocol.
//!
//! - [`parser`] contains the request line and header line parsers.
//! - [`io`] contains the growable read buffer.
//! - [`driver`] contains the integration of all the components above into single API.

pub mod parser;
pub mod io;
pub mod driver;
mod error;

pub use error::ReadError;
