use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};

use std::fmt::{Debug, Display, Formatter};
use std::io::Read;

/// An ID3v2.3 frame ID
///
/// Always 4 characters, each within `'A'..='Z'` or `'0'..='9'`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameId([u8; 4]);

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is not exactly 4 characters long
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::FrameId;
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let id = FrameId::new("TIT2")?;
	/// assert_eq!(id.as_str(), "TIT2");
	///
	/// assert!(FrameId::new("TT2").is_err());
	/// assert!(FrameId::new("tit2").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new(id: &str) -> Result<Self> {
		Self::from_bytes(id.as_bytes())
	}

	pub(crate) fn from_bytes(id: &[u8]) -> Result<Self> {
		match id {
			[a, b, c, d] if id.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) => {
				Ok(Self([*a, *b, *c, *d]))
			},
			_ => Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.to_vec())).into()),
		}
	}

	// Only for IDs known to be valid at compile time
	pub(crate) const fn from_static(id: &[u8; 4]) -> Self {
		Self(*id)
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		// Validated as ASCII on construction
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// The raw bytes of the ID
	pub fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameId({:?})", self.as_str())
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

/// Various flags to describe the content of an ID3v2.3 item
///
/// Only the read side honors these. Frames are always written with no flags set.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	///
	/// This is `Some` when the frame carried a grouping identity byte
	pub grouping_identity: Option<u8>,
	/// The frame was zlib compressed
	///
	/// Frames are decompressed while reading, so this only reflects the original state
	pub compression: bool,
	/// The encryption method symbol
	///
	/// Encrypted frames are never decoded and are kept as binary frames
	pub encryption: Option<u8>,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			compression: flags & 0x0080 == 0x0080,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
		}
	}
}

/// An ID3v2 frame header
///
/// These are rarely constructed by hand. Usually they are created in the background
/// when making a new [`Frame`](crate::id3::v2::Frame).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub flags: FrameFlags,
}

impl FrameHeader {
	/// Create a new [`FrameHeader`]
	///
	/// NOTE: Once the header is created, the ID becomes immutable.
	pub const fn new(id: FrameId, flags: FrameFlags) -> Self {
		Self { id, flags }
	}

	/// Get the ID of the frame
	pub const fn id(&self) -> FrameId {
		self.id
	}
}

/// Reads a 10 byte ID3v2.3 frame header
///
/// `size` is filled in as soon as it is known, so the caller can skip the frame
/// even if the ID turns out to be invalid.
pub(crate) fn parse_header<R>(reader: &mut R, size: &mut u32) -> Result<Option<(FrameId, FrameFlags)>>
where
	R: Read,
{
	let mut header = [0; 10];
	if reader.read_exact(&mut header).is_err() {
		return Ok(None);
	}

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	// Sizes are plain integers in ID3v2.3, only the tag header is synchsafe
	*size = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);

	let id = FrameId::from_bytes(&header[..4])?;
	let flags = FrameFlags::parse_id3v23(u16::from_be_bytes([header[8], header[9]]));

	Ok(Some((id, flags)))
}
