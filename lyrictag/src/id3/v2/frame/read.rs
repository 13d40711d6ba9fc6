use super::Frame;
use super::content::parse_content;
use super::header::parse_header;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::{BinaryFrame, FrameHeader, FrameId};
use crate::macros::{id3v2_err, try_vec};

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

const ATTACHED_PICTURE_ID: FrameId = FrameId::from_static(b"APIC");

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	Eof,
}

impl ParsedFrame {
	pub(crate) fn read<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read,
	{
		let mut size = 0u32;

		let (id, mut flags) = match parse_header(reader, &mut size) {
			Ok(None) => {
				// Stop reading
				return Ok(Self::Eof);
			},
			Ok(Some(some)) => some,
			Err(err) => {
				match parse_options.parsing_mode {
					ParsingMode::Strict => return Err(err),
					ParsingMode::BestAttempt | ParsingMode::Relaxed => {
						log::warn!("Failed to read frame header, skipping: {}", err);

						// Skip this frame and continue reading
						skip_frame(reader, size)?;
						return Ok(Self::Skip);
					},
				}
			},
		};

		if !parse_options.read_cover_art && id == ATTACHED_PICTURE_ID {
			skip_frame(reader, size)?;
			return Ok(Self::Skip);
		}

		if size == 0 {
			if parse_options.parsing_mode == ParsingMode::Strict {
				id3v2_err!(EmptyFrame(id));
			}

			log::debug!("Encountered a zero length frame, skipping");
			return Ok(Self::Skip);
		}

		// In ID3v2.3, the decompressed size comes first, then the encryption method and
		// group identifier
		if flags.compression {
			log::trace!("Reading decompressed size");

			if size < 4 {
				id3v2_err!(BadFrameLength);
			}

			let decompressed_size = reader.read_u32::<BigEndian>()?;
			log::trace!("Frame `{id}` decompresses to {decompressed_size} bytes");
			size -= 4;
		}

		// Get the encryption method symbol
		if let Some(enc) = flags.encryption.as_mut() {
			log::trace!("Reading encryption method symbol");

			if size < 1 {
				id3v2_err!(BadFrameLength);
			}

			*enc = reader.read_u8()?;
			size -= 1;
		}

		// Get the group identifier
		if let Some(group) = flags.grouping_identity.as_mut() {
			log::trace!("Reading group identifier");

			if size < 1 {
				id3v2_err!(BadFrameLength);
			}

			*group = reader.read_u8()?;
			size -= 1;
		}

		// Frames must have at least 1 byte, *after* all of the additional data flags can provide
		if size == 0 {
			id3v2_err!(BadFrameLength);
		}

		let mut content = try_vec![0; size as usize];
		reader
			.read_exact(&mut content)
			.map_err(|_| Id3v2Error::new(Id3v2ErrorKind::BadFrameLength))?;

		// Nothing further we can do with encrypted frames
		if flags.encryption.is_some() {
			return Ok(Self::Next(Frame::Binary(BinaryFrame {
				header: FrameHeader::new(id, flags),
				data: content,
			})));
		}

		if flags.compression {
			content = decompress(&content)?;
		}

		match parse_content(&content, id, flags) {
			Ok(Some(frame)) => Ok(Self::Next(frame)),
			Ok(None) => Ok(Self::Skip),
			Err(err) => match parse_options.parsing_mode {
				ParsingMode::Strict => Err(err),
				ParsingMode::BestAttempt => {
					log::warn!("Failed to parse frame `{id}`, skipping: {err}");
					Ok(Self::Skip)
				},
				ParsingMode::Relaxed => {
					log::warn!("Failed to parse frame `{id}`, keeping it as binary: {err}");
					Ok(Self::Next(Frame::Binary(BinaryFrame {
						header: FrameHeader::new(id, flags),
						data: content,
					})))
				},
			},
		}
	}
}

#[cfg(feature = "id3v2_compression_support")]
fn decompress(content: &[u8]) -> Result<Vec<u8>> {
	let mut decompressed = Vec::new();
	flate2::read::ZlibDecoder::new(content)
		.read_to_end(&mut decompressed)
		.map_err(|err| Id3v2Error::new(Id3v2ErrorKind::Decompression(err)))?;

	Ok(decompressed)
}

#[cfg(not(feature = "id3v2_compression_support"))]
#[allow(clippy::unnecessary_wraps)]
fn decompress(_: &[u8]) -> Result<Vec<u8>> {
	Err(Id3v2Error::new(Id3v2ErrorKind::CompressedFrameEncountered).into())
}

// Note that this is only ever given the full frame size, before any of the
// additional data flags are read.
fn skip_frame(reader: &mut impl Read, size: u32) -> Result<()> {
	log::trace!("Skipping frame of size {}", size);

	let size = u64::from(size);
	let mut reader = reader.take(size);
	let skipped = std::io::copy(&mut reader, &mut std::io::sink())?;
	debug_assert!(skipped <= size);

	Ok(())
}
