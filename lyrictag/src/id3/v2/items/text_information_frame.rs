use crate::error::Result;
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use byteorder::ReadBytesExt;

use std::io::Read;

/// An `ID3v2` text frame
///
/// The encoding is not stored. It is picked from the value every time the frame
/// is written, see [`TextEncoding::select`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	pub(crate) header: FrameHeader,
	/// The text itself
	pub value: String,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	pub fn new(id: FrameId, value: impl Into<String>) -> Self {
		let header = FrameHeader::new(id, FrameFlags::default());
		Self {
			header,
			value: value.into(),
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		self.header.id
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Set the flags for the frame
	pub fn set_flags(&mut self, flags: FrameFlags) {
		self.header.flags = flags;
	}

	/// Read a [`TextInformationFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The encoding byte is unknown
	/// * Unable to decode the text
	pub fn parse<R>(reader: &mut R, id: FrameId, frame_flags: FrameFlags) -> Result<Option<Self>>
	where
		R: Read,
	{
		let Ok(encoding_byte) = reader.read_u8() else {
			return Ok(None);
		};

		let encoding = verify_encoding(encoding_byte)?;
		let value = decode_text(reader, TextDecodeOptions::new().encoding(encoding))?.content;

		let header = FrameHeader::new(id, frame_flags);
		Ok(Some(TextInformationFrame { header, value }))
	}

	/// Convert a [`TextInformationFrame`] to a byte vec
	///
	/// NOTE: This does not include the frame header
	pub fn as_bytes(&self) -> Vec<u8> {
		let encoding = TextEncoding::select([self.value.as_str()]);

		let mut content = encoding.encode(&self.value, false);
		content.insert(0, encoding as u8);
		content
	}
}
