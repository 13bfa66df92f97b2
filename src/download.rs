/* src/download.rs */

use std::borrow::Cow;
use std::path::{Component, Path};

use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderName, HeaderValue};
use tracing::trace;

use crate::body::Body;
use crate::disposition::Disposition;
use crate::error::Error;
use crate::mime;

/// An HTTP response carrying a download [`Body`].
pub type Response = http::Response<Body>;

/// Per-call settings shared by all builders.
///
/// Every field has a usable default, so callers only set what they need:
///
/// ```
/// use download_response::{Disposition, download::Options};
///
/// let options = Options {
///     disposition: Disposition::Inline,
///     ..Options::default()
/// };
/// assert!(options.mime_type.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
	/// File name shown to the user.
	///
	/// Defaults to the last component of the file path. Only consulted by
	/// [`x_send_file`] and [`send_file`]; the stream and content builders
	/// take the name as an argument.
	pub attachment_name: Option<String>,
	/// Defaults to [`Disposition::Attachment`].
	pub disposition: Disposition,
	/// Value of `Content-Type`.
	///
	/// Defaults to the sniffed type for file paths and to
	/// `application/octet-stream` for streams and in-memory content.
	pub mime_type: Option<String>,
	/// Append an RFC 5987 `filename*` parameter for non-ASCII names.
	///
	/// Off by default, which leaves the name quoted verbatim.
	pub encode_filename: bool,
}

impl Options {
	/// Sets the file name shown to the user.
	#[must_use]
	pub fn attachment_name(mut self, name: impl Into<String>) -> Self {
		self.attachment_name = Some(name.into());
		self
	}

	/// Sets the disposition.
	#[must_use]
	pub fn disposition(mut self, disposition: Disposition) -> Self {
		self.disposition = disposition;
		self
	}

	/// Sets an explicit MIME type, skipping detection.
	#[must_use]
	pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	/// Enables or disables the RFC 5987 `filename*` parameter.
	#[must_use]
	pub fn encode_filename(mut self, encode: bool) -> Self {
		self.encode_filename = encode;
		self
	}
}

/// The header a front-end web server watches for internal redirects.
///
/// Different servers use different names:
///
/// - Apache (mod_xsendfile), Lighttpd 1.5, Cherokee: `X-Sendfile`
/// - Lighttpd 1.4: `X-LIGHTTPD-send-file`
/// - Nginx: `X-Accel-Redirect`
///
/// The default is `X-Sendfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XSendFile {
	header: HeaderName,
}

impl XSendFile {
	/// `X-Sendfile`, understood by Apache, Lighttpd 1.5 and Cherokee.
	#[must_use]
	pub fn apache() -> Self {
		Self {
			header: HeaderName::from_static("x-sendfile"),
		}
	}

	/// `X-LIGHTTPD-send-file`, for Lighttpd 1.4.
	#[must_use]
	pub fn lighttpd() -> Self {
		Self {
			header: HeaderName::from_static("x-lighttpd-send-file"),
		}
	}

	/// `X-Accel-Redirect`, for Nginx.
	///
	/// Nginx expects a URI mapped to an `internal` location rather than a
	/// filesystem path; pass that URI as the path.
	#[must_use]
	pub fn nginx() -> Self {
		Self {
			header: HeaderName::from_static("x-accel-redirect"),
		}
	}

	/// Uses a custom header name.
	///
	/// ```
	/// use download_response::download::XSendFile;
	///
	/// assert!(XSendFile::with_header("X-Custom-Send").is_ok());
	/// assert!(XSendFile::with_header("not a header").is_err());
	/// ```
	pub fn with_header(name: &str) -> Result<Self, Error> {
		let header = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
			Error::InvalidHeaderName {
				name: name.to_owned(),
				source,
			}
		})?;
		Ok(Self { header })
	}

	/// The header name, lowercased as HTTP normalizes it.
	#[must_use]
	pub const fn header(&self) -> &HeaderName {
		&self.header
	}
}

impl Default for XSendFile {
	fn default() -> Self {
		Self::apache()
	}
}

/// Builds a response that hands delivery of `path` to the front-end server.
///
/// The path is placed verbatim into the x-sendfile header and the response
/// has no body. Nothing checks that the file exists: a missing file still
/// produces a response, with the MIME type falling back to
/// `application/octet-stream` when it has to be sniffed.
///
/// If the server does not recognise the header, the client receives a
/// 0-byte download.
///
/// ```
/// use std::path::{Component, Path};
/// use download_response::download::{self, Options, XSendFile};
///
/// let path = Path::new("/srv/files/report.pdf");
/// let options = Options::default().mime_type("application/pdf");
/// let response = download::x_send_file(path, &options, &XSendFile::default()).unwrap();
/// assert_eq!(response.headers()["x-sendfile"], "/srv/files/report.pdf");
/// assert!(response.body().is_empty());
/// ```
pub fn x_send_file(
	path: &Path,
	options: &Options,
	x_header: &XSendFile,
) -> Result<Response, Error> {
	let name = resolve_name(options, path);
	let mime_type = resolve_mime(options, path);

	let target = header_value(x_header.header(), path.as_os_str().as_encoded_bytes())?;
	let disposition = disposition_value(options, &name)?;
	let content_type = header_value(&CONTENT_TYPE, mime_type.as_bytes())?;

	let response = http::Response::builder()
		.header(x_header.header(), target)
		.header(CONTENT_DISPOSITION, disposition)
		.header(CONTENT_TYPE, content_type)
		.body(Body::Empty)?;

	trace!(path = %path.display(), header = %x_header.header(), "built x-sendfile response");
	Ok(response)
}

/// Builds a response that sends `body` as a file named `attachment_name`.
///
/// The body is attached as-is. `Content-Type` is `options.mime_type` or
/// `application/octet-stream`; no detection happens here.
///
/// ```
/// use download_response::download::{self, Options};
///
/// let response = download::send_stream("42", "answer.txt", &Options::default()).unwrap();
/// assert_eq!(response.headers()["content-type"], "application/octet-stream");
/// ```
pub fn send_stream(
	body: impl Into<Body>,
	attachment_name: &str,
	options: &Options,
) -> Result<Response, Error> {
	let mime_type = options.mime_type.as_deref().unwrap_or(mime::OCTET_STREAM);

	let content_type = header_value(&CONTENT_TYPE, mime_type.as_bytes())?;
	let disposition = disposition_value(options, attachment_name)?;

	let response = http::Response::builder()
		.header(CONTENT_TYPE, content_type)
		.header(CONTENT_DISPOSITION, disposition)
		.body(body.into())?;

	trace!(attachment_name, mime_type, "built download response");
	Ok(response)
}

/// Builds a response that streams the file at `path`.
///
/// The file is opened first; failure to open it is returned as
/// [`Error::Open`]. The open handle moves into the response body. The
/// attachment name and MIME type are derived from the path and the file's
/// content unless set in `options`.
pub fn send_file(path: &Path, options: &Options) -> Result<Response, Error> {
	let body = Body::open(path).map_err(|source| Error::Open {
		path: path.to_path_buf(),
		source,
	})?;

	let name = resolve_name(options, path);
	let mime_type = resolve_mime(options, path);

	send_stream(
		body,
		&name,
		&Options {
			mime_type: Some(mime_type),
			..options.clone()
		},
	)
}

/// Builds a response that sends in-memory `content` as a file.
///
/// No detection is done on the content: without an explicit
/// `options.mime_type` the type is `application/octet-stream`.
///
/// ```
/// use download_response::download::{self, Options};
///
/// let response = download::send_content("42", "answer.txt", &Options::default()).unwrap();
/// assert_eq!(
///     response.headers()["content-disposition"],
///     "attachment; filename=\"answer.txt\""
/// );
/// ```
pub fn send_content(
	content: impl Into<bytes::Bytes>,
	attachment_name: &str,
	options: &Options,
) -> Result<Response, Error> {
	send_stream(Body::Bytes(content.into()), attachment_name, options)
}

fn resolve_name<'a>(options: &'a Options, path: &'a Path) -> Cow<'a, str> {
	if let Some(name) = &options.attachment_name {
		return Cow::Borrowed(name.as_str());
	}
	// Last component; `..` is kept literally and a bare root yields an empty name.
	match path.components().next_back() {
		Some(Component::Normal(name)) => name.to_string_lossy(),
		Some(Component::ParentDir) => Cow::Borrowed(".."),
		Some(Component::CurDir) => Cow::Borrowed("."),
		Some(Component::RootDir | Component::Prefix(_)) | None => Cow::Borrowed(""),
	}
}

fn resolve_mime(options: &Options, path: &Path) -> String {
	match &options.mime_type {
		Some(mime_type) => mime_type.clone(),
		None => mime::sniff(path).or_default(),
	}
}

fn disposition_value(options: &Options, name: &str) -> Result<HeaderValue, Error> {
	let value = if options.encode_filename {
		options.disposition.header_value_encoded(name)
	} else {
		options.disposition.header_value(name)
	};
	header_value(&CONTENT_DISPOSITION, value.as_bytes())
}

fn header_value(header: &HeaderName, value: &[u8]) -> Result<HeaderValue, Error> {
	HeaderValue::from_bytes(value).map_err(|source| Error::InvalidHeaderValue {
		header: header.to_string(),
		source,
	})
}
