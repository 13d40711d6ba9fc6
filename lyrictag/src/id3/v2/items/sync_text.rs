use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::frame::content::verify_encoding;
use crate::id3::v2::items::language_frame::read_language;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::lang::Language;
use crate::macros::err;
use crate::util::text::{TextDecodeOptions, TextEncoding, decode_text};

use std::io::{Cursor, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

const FRAME_ID: FrameId = FrameId::from_static(b"SYLT");

/// The unit used for [`SynchronizedTextFrame`] timestamps
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
pub enum TimestampFormat {
	/// The unit is MPEG frames
	MPEG = 1,
	/// The unit is milliseconds
	MS = 2,
}

impl TimestampFormat {
	/// Get a `TimestampFormat` from a u8, must be 1-2 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			1 => Some(Self::MPEG),
			2 => Some(Self::MS),
			_ => None,
		}
	}
}

/// The type of text stored in a [`SynchronizedTextFrame`]
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SyncTextContentType {
	Other = 0,
	Lyrics = 1,
	TextTranscription = 2,
	PartName = 3,
	Events = 4,
	Chord = 5,
	Trivia = 6,
	WebpageURL = 7,
	ImageURL = 8,
}

impl SyncTextContentType {
	/// Get a `SyncTextContentType` from a u8, must be 0-8 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::Lyrics),
			2 => Some(Self::TextTranscription),
			3 => Some(Self::PartName),
			4 => Some(Self::Events),
			5 => Some(Self::Chord),
			6 => Some(Self::Trivia),
			7 => Some(Self::WebpageURL),
			8 => Some(Self::ImageURL),
			_ => None,
		}
	}
}

/// Represents an ID3v2 synchronized text frame
///
/// Entries are kept in the order they were added or read. They are never sorted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SynchronizedTextFrame {
	pub(crate) header: FrameHeader,
	/// ISO-639-2 language code
	pub language: Language,
	/// The format of the timestamps
	pub timestamp_format: TimestampFormat,
	/// The type of content stored
	pub content_type: SyncTextContentType,
	/// Unique content description
	pub description: String,
	/// Collection of timestamps and text
	pub content: Vec<(u32, String)>,
}

impl SynchronizedTextFrame {
	/// Create a new [`SynchronizedTextFrame`]
	pub fn new(
		language: Language,
		timestamp_format: TimestampFormat,
		content_type: SyncTextContentType,
		description: String,
		content: Vec<(u32, String)>,
	) -> Self {
		let header = FrameHeader::new(FRAME_ID, FrameFlags::default());
		Self {
			header,
			language,
			timestamp_format,
			content_type,
			description,
			content,
		}
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

	/// Read a [`SynchronizedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// # Errors
	///
	/// * The frame is too short to hold the fixed fields
	/// * The timestamp format is unknown ([`BadTimestampFormat`](Id3v2ErrorKind::BadTimestampFormat))
	/// * At any point it's unable to parse the data ([`BadSyncText`](Id3v2ErrorKind::BadSyncText))
	pub fn parse(data: &[u8], frame_flags: FrameFlags) -> Result<Self> {
		let [encoding, l1, l2, l3, timestamp_format, content_type, ..] = *data else {
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		};

		let encoding = verify_encoding(encoding)?;
		let language = read_language([l1, l2, l3]);
		let timestamp_format = TimestampFormat::from_u8(timestamp_format)
			.ok_or_else(|| Id3v2Error::new(Id3v2ErrorKind::BadTimestampFormat))?;
		let content_type = SyncTextContentType::from_u8(content_type)
			.ok_or_else(|| Id3v2Error::new(Id3v2ErrorKind::BadSyncText))?;

		let body = &data[6..];
		let mut cursor = Cursor::new(body);
		let description = decode_text(
			&mut cursor,
			TextDecodeOptions::new().encoding(encoding).terminated(true),
		)
		.map_err(|_| Id3v2Error::new(Id3v2ErrorKind::BadSyncText))?;

		// It's possible for the description to be the only string with a BOM
		let mut bom = description.bom;

		let mut content = Vec::new();
		while (cursor.position() as usize) < body.len() {
			let text = decode_text(
				&mut cursor,
				TextDecodeOptions::new()
					.encoding(encoding)
					.terminated(true)
					.bom(bom),
			)
			.map_err(|_| Id3v2Error::new(Id3v2ErrorKind::BadSyncText))?;

			if encoding == TextEncoding::UTF16 && text.bom != [0, 0] {
				bom = text.bom;
			}

			let time = cursor
				.read_u32::<BigEndian>()
				.map_err(|_| Id3v2Error::new(Id3v2ErrorKind::BadSyncText))?;

			content.push((time, text.content));
		}

		let header = FrameHeader::new(FRAME_ID, frame_flags);
		Ok(Self {
			header,
			language,
			timestamp_format,
			content_type,
			description: description.content,
			content,
		})
	}

	/// Convert a [`SynchronizedTextFrame`] to an ID3v2 SYLT frame byte Vec
	///
	/// NOTE: This does not include the frame header
	///
	/// # Errors
	///
	/// * The encoded frame would be larger than [`u32::MAX`]
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		let encoding = TextEncoding::select(
			std::iter::once(self.description.as_str())
				.chain(self.content.iter().map(|(_, text)| text.as_str())),
		);

		let mut data = vec![encoding as u8];
		data.write_all(&self.language.as_bytes())?;
		data.write_u8(self.timestamp_format as u8)?;
		data.write_u8(self.content_type as u8)?;
		data.write_all(&encoding.encode(&self.description, true))?;

		for (time, text) in &self.content {
			data.write_all(&encoding.encode(text, true))?;
			data.write_u32::<BigEndian>(*time)?;
		}

		if data.len() as u64 > u64::from(u32::MAX) {
			err!(TooMuchData);
		}

		Ok(data)
	}
}

#[cfg(test)]
mod tests {
	use crate::error::{ErrorKind, Id3v2ErrorKind};
	use crate::id3::v2::{
		FrameFlags, SyncTextContentType, SynchronizedTextFrame, TimestampFormat,
	};
	use crate::lang::Language;

	fn expected() -> SynchronizedTextFrame {
		SynchronizedTextFrame::new(
			Language::ENGLISH,
			TimestampFormat::MS,
			SyncTextContentType::Lyrics,
			String::new(),
			vec![
				(1400, String::from("Hello")),
				(500, String::from("World")),
				(500, String::new()),
			],
		)
	}

	#[rustfmt::skip]
	const LATIN1_SYLT: &[u8] = &[
		0x00,
		b'e', b'n', b'g',
		0x02, 0x01,
		// Empty description
		0x00,
		b'H', b'e', b'l', b'l', b'o', 0x00, 0x00, 0x00, 0x05, 0x78,
		b'W', b'o', b'r', b'l', b'd', 0x00, 0x00, 0x00, 0x01, 0xF4,
		0x00, 0x00, 0x00, 0x01, 0xF4,
	];

	#[test_log::test]
	fn sylt_encode() {
		assert_eq!(expected().as_bytes().unwrap(), LATIN1_SYLT);
	}

	#[test_log::test]
	fn sylt_decode() {
		let parsed = SynchronizedTextFrame::parse(LATIN1_SYLT, FrameFlags::default()).unwrap();
		assert_eq!(parsed, expected());
	}

	#[test_log::test]
	fn sylt_utf16_round_trip() {
		let mut frame = expected();
		frame.content.push((2000, String::from("さよなら")));

		let bytes = frame.as_bytes().unwrap();
		assert_eq!(bytes[0], 1);

		let parsed = SynchronizedTextFrame::parse(&bytes, FrameFlags::default()).unwrap();
		assert_eq!(parsed, frame);
	}

	#[test_log::test]
	fn sylt_utf16_inherits_bom() {
		// Only the description carries a BOM
		#[rustfmt::skip]
		let bytes = [
			0x01,
			b'e', b'n', b'g',
			0x02, 0x01,
			0xFF, 0xFE, 0x00, 0x00,
			b'h', 0x00, b'i', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A,
		];

		let parsed = SynchronizedTextFrame::parse(&bytes, FrameFlags::default()).unwrap();
		assert_eq!(parsed.content, vec![(10, String::from("hi"))]);
	}

	#[test_log::test]
	fn sylt_bad_timestamp_format() {
		let mut bytes = LATIN1_SYLT.to_vec();
		bytes[4] = 3;

		let err = SynchronizedTextFrame::parse(&bytes, FrameFlags::default()).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::BadTimestampFormat)
		));
	}

	#[test_log::test]
	fn sylt_truncated_timestamp() {
		let bytes = &LATIN1_SYLT[..LATIN1_SYLT.len() - 2];
		assert!(SynchronizedTextFrame::parse(bytes, FrameFlags::default()).is_err());
	}
}
