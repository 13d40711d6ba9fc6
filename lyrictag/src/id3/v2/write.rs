use super::Frame;
use super::tag::Id3v2Tag;
use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::io::{Cursor, Seek, SeekFrom, Write};

use byteorder::{BigEndian, WriteBytesExt};

/// Assemble an ID3v2.3 tag
///
/// The tag is written with no flags, no extended header, and no padding. An empty tag
/// still produces the 10 byte header.
pub(crate) fn create_tag(tag: &Id3v2Tag) -> Result<Vec<u8>> {
	log::debug!("Creating ID3v2.3 tag with {} frames", tag.len());

	let mut id3v2 = create_tag_header()?;
	let header_len = id3v2.get_ref().len();

	create_items(&mut id3v2, tag.iter())?;

	let len = id3v2.get_ref().len() - header_len;
	let Ok(len) = u32::try_from(len) else {
		err!(TooMuchData);
	};

	// Go back to the start and write the final size
	id3v2.seek(SeekFrom::Start(6))?;
	id3v2.write_u32::<BigEndian>(len.synch()?)?;

	Ok(id3v2.into_inner())
}

fn create_tag_header() -> Result<Cursor<Vec<u8>>> {
	let mut header = Cursor::new(Vec::new());

	header.write_all(b"ID3")?;
	// Version 3, rev 0
	header.write_all(&[3, 0])?;
	// No flags
	header.write_u8(0)?;
	header.write_u32::<BigEndian>(0)?;

	Ok(header)
}

fn create_items<'a, W>(writer: &mut W, frames: impl Iterator<Item = &'a Frame>) -> Result<()>
where
	W: Write,
{
	for frame in frames {
		if frame.flags().encryption.is_some() {
			log::warn!("Discarding encrypted frame: {}", frame.id());
			continue;
		}

		let value = frame.as_bytes()?;
		write_frame(writer, frame, &value)?;
	}

	Ok(())
}

fn write_frame<W>(writer: &mut W, frame: &Frame, value: &[u8]) -> Result<()>
where
	W: Write,
{
	let Ok(len) = u32::try_from(value.len()) else {
		err!(TooMuchData);
	};

	log::trace!("Writing frame `{}` of size {}", frame.id(), len);

	// Frame sizes are plain integers in ID3v2.3, and no flags are ever written
	writer.write_all(frame.id().as_bytes())?;
	writer.write_u32::<BigEndian>(len)?;
	writer.write_u16::<BigEndian>(0)?;
	writer.write_all(value)?;

	Ok(())
}
