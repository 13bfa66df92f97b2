/* src/body.rs */

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bytes::{Buf, Bytes};

/// The content stream attached to a download response.
///
/// A `Body` owns whatever backs it. For [`Body::File`] that is exactly one
/// open file handle, released when the body is dropped by whoever consumes
/// the response.
///
/// ```
/// use std::io::Read;
/// use download_response::Body;
///
/// let mut body = Body::from("42");
/// let mut out = String::new();
/// body.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "42");
/// ```
#[derive(Default)]
pub enum Body {
	/// No content. Used for x-sendfile responses.
	#[default]
	Empty,
	/// In-memory content.
	Bytes(Bytes),
	/// An open file.
	File(File),
	/// Any other readable source.
	Reader(Box<dyn Read + Send>),
}

impl Body {
	/// Opens the file at `path` for reading.
	pub fn open(path: &Path) -> io::Result<Self> {
		File::open(path).map(Self::File)
	}

	/// Wraps an arbitrary reader.
	pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
		Self::Reader(Box::new(reader))
	}

	/// Whether the body is known to carry no bytes without reading it.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Bytes(bytes) => bytes.is_empty(),
			Self::File(_) | Self::Reader(_) => false,
		}
	}
}

impl fmt::Debug for Body {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("Body::Empty"),
			Self::Bytes(bytes) => f.debug_tuple("Body::Bytes").field(&bytes.len()).finish(),
			Self::File(file) => f.debug_tuple("Body::File").field(file).finish(),
			Self::Reader(_) => f.write_str("Body::Reader(..)"),
		}
	}
}

impl Read for Body {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		match self {
			Self::Empty => Ok(0),
			Self::Bytes(bytes) => {
				let n = buf.len().min(bytes.len());
				buf[..n].copy_from_slice(&bytes[..n]);
				bytes.advance(n);
				Ok(n)
			}
			Self::File(file) => file.read(buf),
			Self::Reader(reader) => reader.read(buf),
		}
	}
}

impl From<Bytes> for Body {
	fn from(bytes: Bytes) -> Self {
		Self::Bytes(bytes)
	}
}

impl From<Vec<u8>> for Body {
	fn from(bytes: Vec<u8>) -> Self {
		Self::Bytes(bytes.into())
	}
}

impl From<&'static [u8]> for Body {
	fn from(bytes: &'static [u8]) -> Self {
		Self::Bytes(Bytes::from_static(bytes))
	}
}

impl From<String> for Body {
	fn from(text: String) -> Self {
		Self::Bytes(text.into())
	}
}

impl From<&'static str> for Body {
	fn from(text: &'static str) -> Self {
		Self::Bytes(Bytes::from_static(text.as_bytes()))
	}
}

impl From<File> for Body {
	fn from(file: File) -> Self {
		Self::File(file)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn read_all(mut body: Body) -> Vec<u8> {
		let mut out = Vec::new();
		body.read_to_end(&mut out).unwrap();
		out
	}

	#[test]
	fn empty_reads_nothing() {
		let body = Body::default();
		assert!(body.is_empty());
		assert!(read_all(body).is_empty());
	}

	#[test]
	fn bytes_read_in_small_chunks() {
		let mut body = Body::from(b"hello world".to_vec());
		let mut chunk = [0u8; 4];
		assert_eq!(body.read(&mut chunk).unwrap(), 4);
		assert_eq!(&chunk, b"hell");
		assert_eq!(read_all(body), b"o world");
	}

	#[test]
	fn file_body_streams_contents() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("answer.txt");
		std::fs::write(&path, b"42").unwrap();
		let body = Body::open(&path).unwrap();
		assert!(matches!(body, Body::File(_)));
		assert!(!body.is_empty());
		assert_eq!(read_all(body), b"42");
	}

	#[test]
	fn open_missing_file_fails() {
		let dir = tempfile::tempdir().unwrap();
		let err = Body::open(&dir.path().join("missing")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn reader_body() {
		let body = Body::from_reader(io::Cursor::new(vec![1u8, 2, 3]));
		assert_eq!(format!("{body:?}"), "Body::Reader(..)");
		assert_eq!(read_all(body), [1, 2, 3]);
	}
}
