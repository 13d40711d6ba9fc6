use crate::error::Result;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};

use std::io::Read;

/// A binary fallback for all unknown `ID3v2` frames
///
/// Encrypted frames also end up here, as their content can't be decoded.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BinaryFrame {
	pub(crate) header: FrameHeader,
	/// The binary data
	pub data: Vec<u8>,
}

impl BinaryFrame {
	/// Create a new [`BinaryFrame`]
	pub fn new(id: FrameId, data: Vec<u8>) -> Self {
		let header = FrameHeader::new(id, FrameFlags::default());
		Self { header, data }
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

	/// Read a [`BinaryFrame`]
	///
	/// NOTE: This will exhaust the entire reader
	///
	/// # Errors
	///
	/// * Failure to read from `reader`
	pub fn parse<R>(reader: &mut R, id: FrameId, frame_flags: FrameFlags) -> Result<Self>
	where
		R: Read,
	{
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;

		let header = FrameHeader::new(id, frame_flags);
		Ok(BinaryFrame { header, data })
	}

	/// Convert a [`BinaryFrame`] to a byte vec
	pub fn as_bytes(&self) -> Vec<u8> {
		self.data.clone()
	}
}
