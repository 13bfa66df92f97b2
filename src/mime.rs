/* src/mime.rs */

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

/// The type reported when nothing more specific is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// How many leading bytes of a file are inspected by [`sniff`].
pub const SNIFF_LEN: u64 = 8192;

/// Outcome of inspecting a file on disk.
///
/// ```
/// use download_response::mime::{OCTET_STREAM, Sniffed};
///
/// let failed = Sniffed::Failed(std::io::ErrorKind::NotFound);
/// assert_eq!(failed.or_default(), OCTET_STREAM);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sniffed {
	/// The file was read and classified.
	Detected(String),
	/// The file could not be read.
	Failed(io::ErrorKind),
}

impl Sniffed {
	/// The detected type, or [`OCTET_STREAM`] when inspection failed.
	#[must_use]
	pub fn or_default(self) -> String {
		match self {
			Self::Detected(mime) => mime,
			Self::Failed(_) => OCTET_STREAM.to_owned(),
		}
	}
}

/// Classifies `content` by inspecting its bytes only.
///
/// Detection order by priority:
/// 1. Magic byte sniffing (requires `sniff` feature)
/// 2. Text heuristic: NUL-free UTF-8 content yields `text/plain`
/// 3. Fallback: `application/octet-stream`, also for empty content
///
/// `content` may be a prefix of a larger file; a multi-byte character cut
/// off at the end still counts as UTF-8.
///
/// ```
/// let mime = download_response::mime::detect_content(b"hello world");
/// assert_eq!(mime, "text/plain");
/// ```
#[must_use]
pub fn detect_content(content: &[u8]) -> String {
	if content.is_empty() {
		return OCTET_STREAM.to_owned();
	}

	#[cfg(feature = "sniff")]
	if let Some(kind) = infer::get(content) {
		return kind.mime_type().to_owned();
	}

	if looks_like_text(content) {
		return "text/plain".to_owned();
	}

	OCTET_STREAM.to_owned()
}

/// Like [`detect_content`], but consults the extension of `path` when the
/// content is inconclusive (requires `extension` feature).
///
/// The file sniffing used by the download builders never calls this; it is
/// for callers that explicitly trust file names. `path` never touches the
/// filesystem.
///
/// ```
/// use std::path::Path;
/// let mime = download_response::mime::detect(Path::new("index.html"), &[]);
/// # #[cfg(feature = "extension")]
/// assert_eq!(mime, "text/html");
/// ```
#[must_use]
pub fn detect(path: &Path, content: &[u8]) -> String {
	let detected = detect_content(content);
	if detected != OCTET_STREAM {
		return detected;
	}

	#[cfg(feature = "extension")]
	if let Some(guess) = mime_guess::from_path(path).first()
		&& !(guess.type_() == "application" && guess.subtype() == "octet-stream")
	{
		return guess.to_string();
	}

	#[cfg(not(feature = "extension"))]
	let _ = path;

	detected
}

/// Reads the head of the file at `path` and classifies it with
/// [`detect_content`]. The file name plays no part in the result.
///
/// Any I/O failure (missing file, permission denied, a directory) yields
/// [`Sniffed::Failed`]; this function never returns an error.
///
/// ```
/// use download_response::mime::{self, Sniffed};
///
/// let sniffed = mime::sniff(std::path::Path::new("/nonexistent/file.bin"));
/// assert!(matches!(sniffed, Sniffed::Failed(_)));
/// ```
#[must_use]
pub fn sniff(path: &Path) -> Sniffed {
	match read_head(path) {
		Ok(head) => Sniffed::Detected(detect_content(&head)),
		Err(e) => {
			debug!(
				path = %path.display(),
				error = %e,
				"mime sniffing failed, using {OCTET_STREAM}"
			);
			Sniffed::Failed(e.kind())
		}
	}
}

fn read_head(path: &Path) -> io::Result<Vec<u8>> {
	let mut head = Vec::new();
	File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
	Ok(head)
}

fn looks_like_text(content: &[u8]) -> bool {
	if content.contains(&0) {
		return false;
	}
	match std::str::from_utf8(content) {
		Ok(_) => true,
		// Truncated trailing sequence, not an invalid one.
		Err(e) => e.error_len().is_none(),
	}
}
