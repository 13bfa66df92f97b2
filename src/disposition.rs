/* src/disposition.rs */

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::Error;

/// RFC 5987 `attr-char` minus the unreserved punctuation it allows.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'!')
	.remove(b'#')
	.remove(b'$')
	.remove(b'&')
	.remove(b'+')
	.remove(b'-')
	.remove(b'.')
	.remove(b'^')
	.remove(b'_')
	.remove(b'`')
	.remove(b'|')
	.remove(b'~');

/// How the client should present the content.
///
/// Parse untrusted input with [`str::parse`]; only the exact lowercase
/// strings `attachment` and `inline` are accepted.
///
/// ```
/// use download_response::Disposition;
///
/// let d: Disposition = "inline".parse().unwrap();
/// assert_eq!(d, Disposition::Inline);
/// assert!("Inline".parse::<Disposition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disposition {
	/// Prompt the user to save the file.
	#[default]
	Attachment,
	/// Display the content in the browser when possible.
	Inline,
}

impl Disposition {
	/// The header token for this disposition.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Attachment => "attachment",
			Self::Inline => "inline",
		}
	}

	/// Renders a `Content-Disposition` value for `filename`.
	///
	/// The name is quoted verbatim. Embedded double quotes are not escaped
	/// and non-ASCII names are not encoded; use [`Self::header_value_encoded`]
	/// when the name may contain characters outside printable ASCII.
	///
	/// ```
	/// use download_response::Disposition;
	///
	/// assert_eq!(
	///     Disposition::Attachment.header_value("answer.txt"),
	///     "attachment; filename=\"answer.txt\""
	/// );
	/// ```
	#[must_use]
	pub fn header_value(self, filename: &str) -> String {
		format!("{}; filename=\"{filename}\"", self.as_str())
	}

	/// Like [`Self::header_value`], but appends an RFC 5987
	/// `filename*=UTF-8''...` parameter when `filename` is not plain ASCII.
	///
	/// ```
	/// use download_response::Disposition;
	///
	/// assert_eq!(
	///     Disposition::Inline.header_value_encoded("résumé.pdf"),
	///     "inline; filename=\"résumé.pdf\"; filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"
	/// );
	/// ```
	#[must_use]
	pub fn header_value_encoded(self, filename: &str) -> String {
		let plain = self.header_value(filename);
		if filename.is_ascii() {
			return plain;
		}
		let encoded = utf8_percent_encode(filename, ATTR_CHAR);
		format!("{plain}; filename*=UTF-8''{encoded}")
	}
}

impl fmt::Display for Disposition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Disposition {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"attachment" => Ok(Self::Attachment),
			"inline" => Ok(Self::Inline),
			other => Err(Error::InvalidDisposition {
				given: other.to_owned(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_both_values() {
		assert_eq!(
			"attachment".parse::<Disposition>().unwrap(),
			Disposition::Attachment
		);
		assert_eq!("inline".parse::<Disposition>().unwrap(), Disposition::Inline);
	}

	#[test]
	fn default_is_attachment() {
		assert_eq!(Disposition::default(), Disposition::Attachment);
	}

	#[test]
	fn rejects_everything_else() {
		for bad in ["", "Attachment", "INLINE", " inline", "form-data", "foo"] {
			let err = bad.parse::<Disposition>().unwrap_err();
			assert!(
				matches!(&err, Error::InvalidDisposition { given } if given == bad),
				"{bad:?} was not rejected as expected"
			);
		}
	}

	#[test]
	fn error_names_allowed_values_and_input() {
		let msg = "download".parse::<Disposition>().unwrap_err().to_string();
		assert!(msg.contains("\"attachment\""));
		assert!(msg.contains("\"inline\""));
		assert!(msg.contains("\"download\""));
	}

	#[test]
	fn renders_both_modes() {
		assert_eq!(
			Disposition::Attachment.header_value("answer.txt"),
			"attachment; filename=\"answer.txt\""
		);
		assert_eq!(
			Disposition::Inline.header_value("answer.txt"),
			"inline; filename=\"answer.txt\""
		);
	}

	#[test]
	fn quotes_are_not_escaped() {
		assert_eq!(
			Disposition::Attachment.header_value("a\"b.txt"),
			"attachment; filename=\"a\"b.txt\""
		);
	}

	#[test]
	fn encoded_leaves_ascii_alone() {
		assert_eq!(
			Disposition::Attachment.header_value_encoded("report 2024.csv"),
			"attachment; filename=\"report 2024.csv\""
		);
	}

	#[test]
	fn encoded_appends_extended_parameter() {
		assert_eq!(
			Disposition::Attachment.header_value_encoded("中文.txt"),
			"attachment; filename=\"中文.txt\"; filename*=UTF-8''%E4%B8%AD%E6%96%87.txt"
		);
	}

	#[test]
	fn display_matches_token() {
		assert_eq!(Disposition::Inline.to_string(), "inline");
	}
}
