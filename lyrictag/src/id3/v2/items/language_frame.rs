use crate::error::Result;
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::lang::Language;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::Read;

use byteorder::ReadBytesExt;

const COMMENT_ID: FrameId = FrameId::from_static(b"COMM");
const UNSYNC_TEXT_ID: FrameId = FrameId::from_static(b"USLT");

// Generic struct for a text frame that has a language
//
// This exists to deduplicate some code between `CommentFrame` and `UnsynchronizedTextFrame`
struct LanguageFrame {
	language: Language,
	description: String,
	content: String,
}

impl LanguageFrame {
	fn parse<R>(reader: &mut R) -> Result<Option<Self>>
	where
		R: Read,
	{
		let Ok(encoding_byte) = reader.read_u8() else {
			return Ok(None);
		};

		let encoding = verify_encoding(encoding_byte)?;

		let mut language = [0; 3];
		reader.read_exact(&mut language)?;
		let language = read_language(language);

		let description = decode_text(
			reader,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?;
		let content = decode_text(
			reader,
			TextDecodeOptions::new()
				.encoding(encoding)
				.bom(description.bom),
		)?
		.content;

		Ok(Some(Self {
			language,
			description: description.content,
			content,
		}))
	}

	fn create_bytes(language: Language, description: &str, content: &str) -> Vec<u8> {
		let encoding = TextEncoding::select([description, content]);

		let mut bytes = vec![encoding as u8];
		bytes.extend(language.as_bytes());
		bytes.extend(encoding.encode(description, true));
		bytes.extend(encoding.encode(content, false));

		bytes
	}
}

/// Languages are not validated by every tagger, anything unusable becomes "XXX"
pub(in crate::id3::v2) fn read_language(raw: [u8; 3]) -> Language {
	Language::from_bytes(raw).unwrap_or_else(|_| {
		log::debug!("Replacing invalid frame language {raw:?} with \"XXX\"");
		Language::UNKNOWN
	})
}

/// An `ID3v2` comment frame
///
/// Similar to `USLT` frames, comments are told apart by their descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommentFrame {
	pub(crate) header: FrameHeader,
	/// ISO-639-2 language code
	pub language: Language,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl CommentFrame {
	/// Create a new [`CommentFrame`]
	pub fn new(language: Language, description: String, content: String) -> Self {
		let header = FrameHeader::new(COMMENT_ID, FrameFlags::default());
		Self {
			header,
			language,
			description,
			content,
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		COMMENT_ID
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Set the flags for the frame
	pub fn set_flags(&mut self, flags: FrameFlags) {
		self.header.flags = flags;
	}

	/// Read a [`CommentFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Unable to decode the text
	pub fn parse<R>(reader: &mut R, frame_flags: FrameFlags) -> Result<Option<Self>>
	where
		R: Read,
	{
		Ok(LanguageFrame::parse(reader)?.map(|frame| Self {
			header: FrameHeader::new(COMMENT_ID, frame_flags),
			language: frame.language,
			description: frame.description,
			content: frame.content,
		}))
	}

	/// Convert a [`CommentFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	pub fn as_bytes(&self) -> Vec<u8> {
		LanguageFrame::create_bytes(self.language, &self.description, &self.content)
	}
}

/// An `ID3v2` unsynchronized lyrics/text frame
///
/// USLT frames are told apart by their language and description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnsynchronizedTextFrame {
	pub(crate) header: FrameHeader,
	/// ISO-639-2 language code
	pub language: Language,
	/// Unique content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl UnsynchronizedTextFrame {
	/// Create a new [`UnsynchronizedTextFrame`]
	pub fn new(language: Language, description: String, content: String) -> Self {
		let header = FrameHeader::new(UNSYNC_TEXT_ID, FrameFlags::default());
		Self {
			header,
			language,
			description,
			content,
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		UNSYNC_TEXT_ID
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Set the flags for the frame
	pub fn set_flags(&mut self, flags: FrameFlags) {
		self.header.flags = flags;
	}

	/// Read a [`UnsynchronizedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * Unable to decode the text
	pub fn parse<R>(reader: &mut R, frame_flags: FrameFlags) -> Result<Option<Self>>
	where
		R: Read,
	{
		Ok(LanguageFrame::parse(reader)?.map(|frame| Self {
			header: FrameHeader::new(UNSYNC_TEXT_ID, frame_flags),
			language: frame.language,
			description: frame.description,
			content: frame.content,
		}))
	}

	/// Convert a [`UnsynchronizedTextFrame`] to a byte vec
	///
	/// NOTE: This does not include a frame header
	pub fn as_bytes(&self) -> Vec<u8> {
		LanguageFrame::create_bytes(self.language, &self.description, &self.content)
	}
}
