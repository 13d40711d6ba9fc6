//! ISO-639-2 language codes
//!
//! Excerpt from <https://mutagen-specs.readthedocs.io/en/latest/id3/id3v2.4.0-structure.html>:
//!
//! > The three byte language field, present in several frames, is used to describe
//! > the language of the frame's content, according to [ISO-639-2].
//! > The language should be represented in lower case. If the language is not known
//! > the string "XXX" should be used.
//!
//! [ISO-639-2]: https://en.wikipedia.org/wiki/List_of_ISO_639-2_codes

use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

use std::fmt::{Debug, Display, Formatter};

/// A three letter language code
///
/// Only ASCII letters are accepted, so any `Language` can be written as-is.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Language([u8; 3]);

impl Language {
	/// English
	pub const ENGLISH: Self = Self(*b"eng");

	/// Unknown/unspecified language
	pub const UNKNOWN: Self = Self(*b"XXX");

	/// Create a `Language` from a code such as `"eng"` or `"jpn"`
	///
	/// # Errors
	///
	/// `code` is not exactly 3 ASCII letters
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::Language;
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let japanese = Language::new("jpn")?;
	/// assert_eq!(japanese.as_str(), "jpn");
	///
	/// assert!(Language::new("en").is_err());
	/// assert!(Language::new("e1g").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new(code: &str) -> Result<Self> {
		match code.as_bytes() {
			[a, b, c] => Self::from_bytes([*a, *b, *c]),
			other => {
				let mut padded = [0; 3];
				for (dst, src) in padded.iter_mut().zip(other) {
					*dst = *src;
				}

				Err(Id3v2Error::new(Id3v2ErrorKind::InvalidLanguage(padded)).into())
			},
		}
	}

	/// Create a `Language` from the raw bytes of a frame
	///
	/// # Errors
	///
	/// Any byte is not an ASCII letter
	pub fn from_bytes(bytes: [u8; 3]) -> Result<Self> {
		if bytes.iter().all(u8::is_ascii_alphabetic) {
			return Ok(Self(bytes));
		}

		Err(Id3v2Error::new(Id3v2ErrorKind::InvalidLanguage(bytes)).into())
	}

	/// The code as a string
	pub fn as_str(&self) -> &str {
		// Validated as ASCII on construction
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// The raw code
	pub fn as_bytes(&self) -> [u8; 3] {
		self.0
	}
}

impl Default for Language {
	fn default() -> Self {
		Self::ENGLISH
	}
}

impl Display for Language {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for Language {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Language({:?})", self.as_str())
	}
}
