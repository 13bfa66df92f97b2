/* src/error.rs */

use std::path::PathBuf;

use thiserror::Error;

/// All errors that download_response can produce.
#[derive(Debug, Error)]
pub enum Error {
	/// The disposition string is neither `attachment` nor `inline`.
	#[error("disposition must be either \"attachment\" or \"inline\", \"{given}\" given")]
	InvalidDisposition {
		/// The rejected input, verbatim.
		given: String,
	},

	/// The file to send could not be opened.
	#[error("failed to open '{path}': {source}")]
	Open {
		/// The path passed to the builder.
		path: PathBuf,
		/// The underlying I/O error.
		source: std::io::Error,
	},

	/// The x-sendfile header name is not a valid HTTP header name.
	#[error("invalid header name '{name}': {source}")]
	InvalidHeaderName {
		/// The rejected header name.
		name: String,
		/// The underlying parse error.
		source: http::header::InvalidHeaderName,
	},

	/// A computed header value contains bytes HTTP does not allow.
	#[error("invalid value for header '{header}': {source}")]
	InvalidHeaderValue {
		/// The header the value was meant for.
		header: String,
		/// The underlying parse error.
		source: http::header::InvalidHeaderValue,
	},

	/// The response builder rejected its parts.
	#[error("response assembly failed: {0}")]
	Response(#[from] http::Error),
}
