use super::frame::read::ParsedFrame;
use super::header::{Id3v2Header, Id3v2Version};
use super::tag::Id3v2Tag;
use crate::config::ParseOptions;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::util::synchsafe::resynchronize;

use std::borrow::Cow;

use byteorder::{BigEndian, ReadBytesExt};

/// Parse the frames of a tag
///
/// `content` is everything between the tag header and the footer (if any).
pub(crate) fn parse_id3v2(
	content: &[u8],
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag> {
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	let major = match header.version {
		Id3v2Version::V3 => 3,
		Id3v2Version::V2 => 2,
		Id3v2Version::V4 => 4,
	};
	if major != 3 {
		return Err(
			Id3v2Error::new(Id3v2ErrorKind::BadId3v2Version(major, header.revision)).into(),
		);
	}

	let content = if header.flags.unsynchronisation {
		// Unsynchronize the entire tag
		Cow::Owned(resynchronize(content))
	} else {
		Cow::Borrowed(content)
	};

	let mut reader = &content[..];
	if header.flags.extended_header {
		skip_extended_header(&mut reader)?;
	}

	read_all_frames_into_tag(&mut reader, header, parse_options)
}

// ID3v2.3 extended headers have a plain (non-synchsafe) size that excludes the size itself
fn skip_extended_header(reader: &mut &[u8]) -> Result<()> {
	let extended_size = reader.read_u32::<BigEndian>()? as usize;
	if (extended_size != 6 && extended_size != 10) || extended_size >= reader.len() {
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
	}

	log::trace!("Skipping extended header of size {extended_size}");
	*reader = &reader[extended_size..];
	Ok(())
}

fn read_all_frames_into_tag(
	reader: &mut &[u8],
	header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Id3v2Tag> {
	let mut tag = Id3v2Tag::default();
	tag.set_flags(header.flags);

	loop {
		match ParsedFrame::read(reader, parse_options)? {
			ParsedFrame::Next(frame) => {
				let frame_value_is_empty = frame.is_empty();
				if let Some(replaced_frame) = tag.insert(frame) {
					// Duplicate frames are not allowed. But if this occurs we try
					// to keep the frame with the non-empty content. Superfluous,
					// duplicate frames that follow the first frame are often empty.
					if frame_value_is_empty && !replaced_frame.is_empty() {
						log::warn!(
							"Restoring non-empty frame with ID \"{id}\" that has been replaced by \
							 an empty frame with the same ID",
							id = replaced_frame.id()
						);
						drop(tag.insert(replaced_frame));
					} else {
						log::warn!(
							"Replaced frame with ID \"{id}\" by a frame with the same ID",
							id = replaced_frame.id()
						);
					}
				}
			},
			// No frame content found or ignored due to errors, but we can expect more frames
			ParsedFrame::Skip => {},
			// No frame content found, and we can expect there are no more frames
			ParsedFrame::Eof => break,
		}
	}

	Ok(tag)
}
