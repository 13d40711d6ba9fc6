use crate::error::{ErrorKind, LyricTagError, Result};
use crate::macros::err;

use std::io::Read;

use byteorder::ReadBytesExt;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// Pick the encoding a frame should be written with
	///
	/// Every string that shares the frame's encoding byte must be passed in. Latin-1 is
	/// used when all of them fit, otherwise UTF-16 (ID3v2.3 has no UTF-8).
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::TextEncoding;
	///
	/// assert_eq!(TextEncoding::select(["Caf\u{e9}"]), TextEncoding::Latin1);
	/// assert_eq!(TextEncoding::select(["Caf\u{e9}", "悪くない"]), TextEncoding::UTF16);
	/// ```
	pub fn select<'a, I>(texts: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		if texts.into_iter().all(Self::verify_latin1) {
			Self::Latin1
		} else {
			Self::UTF16
		}
	}

	pub(crate) fn verify_latin1(text: &str) -> bool {
		text.chars().all(|c| c as u32 <= 255)
	}

	/// Encode `text`, substituting `?` for anything Latin-1 cannot represent
	pub(crate) fn encode(self, text: &str, terminated: bool) -> Vec<u8> {
		let mut out = match self {
			TextEncoding::Latin1 => text
				.chars()
				.map(|c| u8::try_from(c).unwrap_or(b'?'))
				.collect(),
			TextEncoding::UTF16 => {
				let mut out = vec![0xFF, 0xFE];
				out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
				out
			},
			TextEncoding::UTF16BE => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
			TextEncoding::UTF8 => text.as_bytes().to_vec(),
		};

		if terminated {
			out.extend(self.terminator());
		}

		out
	}

	fn terminator(self) -> &'static [u8] {
		match self {
			TextEncoding::Latin1 | TextEncoding::UTF8 => &[0],
			TextEncoding::UTF16 | TextEncoding::UTF16BE => &[0, 0],
		}
	}
}

const NO_BOM: [u8; 2] = [0, 0];
const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// A decoded string, and the byte order mark it was read with (if UTF-16)
#[derive(Eq, PartialEq, Debug, Default)]
pub(crate) struct DecodeTextResult {
	pub(crate) content: String,
	pub(crate) bom: [u8; 2],
}

/// How to read a string from a frame
///
/// The defaults are UTF-8, reading to the end of the input, with no inherited byte order mark.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TextDecodeOptions {
	encoding: TextEncoding,
	terminated: bool,
	bom: [u8; 2],
}

impl Default for TextDecodeOptions {
	fn default() -> Self {
		Self {
			encoding: TextEncoding::UTF8,
			terminated: false,
			bom: NO_BOM,
		}
	}
}

impl TextDecodeOptions {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn encoding(mut self, encoding: TextEncoding) -> Self {
		self.encoding = encoding;
		self
	}

	/// Stop at the encoding's null terminator rather than the end of the input
	pub(crate) fn terminated(mut self, terminated: bool) -> Self {
		self.terminated = terminated;
		self
	}

	/// The byte order mark of an earlier UTF-16 string in the same frame
	pub(crate) fn bom(mut self, bom: [u8; 2]) -> Self {
		self.bom = bom;
		self
	}
}

pub(crate) fn decode_text<R>(reader: &mut R, options: TextDecodeOptions) -> Result<DecodeTextResult>
where
	R: Read,
{
	let raw = if options.terminated {
		read_terminated(reader, options.encoding)
	} else {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		raw
	};

	if raw.is_empty() {
		return Ok(DecodeTextResult::default());
	}

	let (mut content, bom) = match options.encoding {
		TextEncoding::Latin1 => (raw.iter().copied().map(char::from).collect::<String>(), NO_BOM),
		TextEncoding::UTF8 => (String::from_utf8(raw)?, NO_BOM),
		TextEncoding::UTF16BE => (utf16_decode_bytes(&raw, u16::from_be_bytes)?, NO_BOM),
		TextEncoding::UTF16 => {
			if raw.len() % 2 != 0 {
				err!(TextDecode("UTF-16 string has an odd length"));
			}

			// Strings after the first in a frame may lean on an earlier BOM
			let (bom, body) = match raw.split_first_chunk::<2>() {
				Some((&bom @ (BOM_LE | BOM_BE), body)) => (bom, body),
				_ => (options.bom, &raw[..]),
			};

			let content = match bom {
				BOM_LE => utf16_decode_bytes(body, u16::from_le_bytes)?,
				BOM_BE => utf16_decode_bytes(body, u16::from_be_bytes)?,
				_ => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
			};

			(content, bom)
		},
	};

	trim_end_nulls(&mut content);
	Ok(DecodeTextResult { content, bom })
}

// Reads up to and including the terminator, which is not returned. Running out of input
// ends the string.
fn read_terminated<R>(reader: &mut R, encoding: TextEncoding) -> Vec<u8>
where
	R: Read,
{
	let mut raw = Vec::new();
	match encoding.terminator().len() {
		1 => {
			while let Ok(byte) = reader.read_u8() {
				if byte == 0 {
					break;
				}
				raw.push(byte);
			}
		},
		_ => {
			while let (Ok(b1), Ok(b2)) = (reader.read_u8(), reader.read_u8()) {
				if [b1, b2] == [0, 0] {
					break;
				}
				raw.extend([b1, b2]);
			}
		},
	}

	raw
}

/// Decode UTF-16 code units
///
/// Some taggers pack several null separated strings into one value, each with its own
/// BOM. A BOM directly after a null is dropped, any other U+FEFF is kept as text.
pub(crate) fn utf16_decode_bytes(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
	let mut units = Vec::with_capacity(bytes.len() / 2);
	let mut after_null = false;
	for pair in bytes.chunks_exact(2) {
		let pair = [pair[0], pair[1]];
		if after_null && matches!(pair, BOM_LE | BOM_BE) {
			after_null = false;
			continue;
		}

		let unit = to_unit(pair);
		after_null = unit == 0;
		units.push(unit);
	}

	let mut text = String::from_utf16(&units).map_err(|_| {
		LyricTagError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string"))
	})?;

	trim_end_nulls(&mut text);
	Ok(text)
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	let len = text.trim_end_matches('\0').len();
	text.truncate(len);
}
