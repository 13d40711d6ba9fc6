use crate::error::Result;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::macros::err;
use crate::picture::{CoverArt, PictureType};
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::{Read, Write as _};

use byteorder::{ReadBytesExt as _, WriteBytesExt as _};

const FRAME_ID: FrameId = FrameId::from_static(b"APIC");

/// An `ID3v2` attached picture frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	pub(crate) header: FrameHeader,
	/// The picture itself
	pub picture: CoverArt,
}

impl AttachedPictureFrame {
	/// Create a new [`AttachedPictureFrame`]
	pub fn new(picture: CoverArt) -> Self {
		let header = FrameHeader::new(FRAME_ID, FrameFlags::default());
		Self { header, picture }
	}

	/// Get the ID for the frame
	pub fn id(&self) -> FrameId {
		FRAME_ID
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header.flags
	}

	/// Set the flags for the frame
	pub fn set_flags(&mut self, flags: FrameFlags) {
		self.header.flags = flags;
	}

	/// Get an [`AttachedPictureFrame`] from ID3v2 APIC bytes
	///
	/// NOTE: This expects *only* the frame content
	///
	/// # Errors
	///
	/// * There isn't enough data present
	/// * Unable to decode any of the text
	pub fn parse<R>(reader: &mut R, frame_flags: FrameFlags) -> Result<Self>
	where
		R: Read,
	{
		let Some(encoding) = TextEncoding::from_u8(reader.read_u8()?) else {
			err!(NotAPicture);
		};

		let mime_type = decode_text(
			reader,
			TextDecodeOptions::new()
				.encoding(TextEncoding::Latin1)
				.terminated(true),
		)?
		.content;

		let picture_type = PictureType::from_u8(reader.read_u8()?);

		let description = decode_text(
			reader,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)?
		.content;

		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;

		let header = FrameHeader::new(FRAME_ID, frame_flags);
		Ok(Self {
			header,
			picture: CoverArt {
				mime_type,
				picture_type,
				description,
				data,
			},
		})
	}

	/// Convert an [`AttachedPictureFrame`] to a ID3v2 APIC byte Vec
	///
	/// NOTE: This does not include the frame header
	///
	/// # Errors
	///
	/// * Too much data was provided
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		let encoding = TextEncoding::select([self.picture.description.as_str()]);

		let mut data = vec![encoding as u8];

		// The MIME type is always Latin-1
		data.write_all(&TextEncoding::Latin1.encode(&self.picture.mime_type, true))?;
		data.write_u8(self.picture.picture_type.as_u8())?;
		data.write_all(&encoding.encode(&self.picture.description, true))?;
		data.write_all(&self.picture.data)?;

		if data.len() as u64 > u64::from(u32::MAX) {
			err!(TooMuchData);
		}

		Ok(data)
	}
}

#[cfg(test)]
mod tests {
	use crate::id3::v2::{AttachedPictureFrame, FrameFlags};
	use crate::picture::{CoverArt, PictureType};

	#[test_log::test]
	fn apic_layout() {
		let frame = AttachedPictureFrame::new(CoverArt::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]));

		let mut expected = vec![0x00];
		expected.extend(b"image/jpeg\0");
		expected.push(3);
		expected.push(0);
		expected.extend([0xFF, 0xD8, 0xFF]);

		assert_eq!(frame.as_bytes().unwrap(), expected);
	}

	#[test_log::test]
	fn apic_round_trip() {
		let mut picture = CoverArt::new("image/png", vec![0x89, b'P', b'N', b'G', 0, 0, 0]);
		picture.picture_type = PictureType::CoverBack;
		picture.description = String::from("裏");

		let frame = AttachedPictureFrame::new(picture);
		let bytes = frame.as_bytes().unwrap();

		let parsed = AttachedPictureFrame::parse(&mut &bytes[..], FrameFlags::default()).unwrap();
		assert_eq!(parsed, frame);
	}
}
