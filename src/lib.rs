/* src/lib.rs */

//! Headless builders for file download responses.
//!
//! Four builders in [`download`] turn a file path, a stream, or in-memory
//! bytes into an [`http::Response`] with `Content-Type` and
//! `Content-Disposition` set, or hand delivery off to a front-end server via
//! an x-sendfile header.

pub mod body;
pub mod disposition;
pub mod download;
pub mod error;
pub mod mime;

pub use body::Body;
pub use disposition::Disposition;
pub use error::Error;
