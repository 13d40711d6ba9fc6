//! Cover art handling

use crate::error::{ErrorKind, LyricTagError, Result};
use crate::macros::err;

use std::fmt::{Debug, Formatter};

use data_encoding::BASE64;

/// The picture type, according to ID3v2 APIC
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[non_exhaustive]
pub enum PictureType {
	Other,
	Icon,
	OtherIcon,
	#[default]
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
	Undefined(u8),
}

impl PictureType {
	/// Get a `u8` from a `PictureType` according to ID3v2 APIC
	pub fn as_u8(&self) -> u8 {
		match self {
			Self::Other => 0,
			Self::Icon => 1,
			Self::OtherIcon => 2,
			Self::CoverFront => 3,
			Self::CoverBack => 4,
			Self::Leaflet => 5,
			Self::Media => 6,
			Self::LeadArtist => 7,
			Self::Artist => 8,
			Self::Conductor => 9,
			Self::Band => 10,
			Self::Composer => 11,
			Self::Lyricist => 12,
			Self::RecordingLocation => 13,
			Self::DuringRecording => 14,
			Self::DuringPerformance => 15,
			Self::ScreenCapture => 16,
			Self::BrightFish => 17,
			Self::Illustration => 18,
			Self::BandLogo => 19,
			Self::PublisherLogo => 20,
			Self::Undefined(i) => *i,
		}
	}

	/// Get a `PictureType` from a u8 according to ID3v2 APIC
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0 => Self::Other,
			1 => Self::Icon,
			2 => Self::OtherIcon,
			3 => Self::CoverFront,
			4 => Self::CoverBack,
			5 => Self::Leaflet,
			6 => Self::Media,
			7 => Self::LeadArtist,
			8 => Self::Artist,
			9 => Self::Conductor,
			10 => Self::Band,
			11 => Self::Composer,
			12 => Self::Lyricist,
			13 => Self::RecordingLocation,
			14 => Self::DuringRecording,
			15 => Self::DuringPerformance,
			16 => Self::ScreenCapture,
			17 => Self::BrightFish,
			18 => Self::Illustration,
			19 => Self::BandLogo,
			20 => Self::PublisherLogo,
			i => Self::Undefined(i),
		}
	}
}

/// An embedded picture
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct CoverArt {
	/// The picture's MIME type, such as `image/jpeg`
	pub mime_type: String,
	/// The picture type according to ID3v2 APIC
	pub picture_type: PictureType,
	/// The picture's description
	pub description: String,
	/// The binary data of the picture
	pub data: Vec<u8>,
}

impl Debug for CoverArt {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CoverArt")
			.field("mime_type", &self.mime_type)
			.field("picture_type", &self.picture_type)
			.field("description", &self.description)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl CoverArt {
	/// Create a front cover from raw image data
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::picture::{CoverArt, PictureType};
	///
	/// let cover = CoverArt::new("image/png", vec![0x89, b'P', b'N', b'G']);
	/// assert_eq!(cover.picture_type, PictureType::CoverFront);
	/// assert!(cover.description.is_empty());
	/// ```
	pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
		Self {
			mime_type: mime_type.into(),
			picture_type: PictureType::CoverFront,
			description: String::new(),
			data,
		}
	}

	/// Create a front cover from a `data:<mime>;base64,<payload>` URL
	///
	/// # Errors
	///
	/// * `url` is not a base64 data URL
	/// * The payload is not valid base64
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::picture::CoverArt;
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let cover = CoverArt::from_data_url("data:image/jpeg;base64,/9j/")?;
	/// assert_eq!(cover.mime_type, "image/jpeg");
	/// assert_eq!(cover.data, [0xFF, 0xD8, 0xFF]);
	/// # Ok(()) }
	/// ```
	pub fn from_data_url(url: &str) -> Result<Self> {
		let Some(rest) = url.strip_prefix("data:") else {
			err!(NotAPicture);
		};

		let Some((mime_type, payload)) = rest.split_once(";base64,") else {
			err!(NotAPicture);
		};

		let data = BASE64
			.decode(payload.trim().as_bytes())
			.map_err(|_| LyricTagError::new(ErrorKind::NotAPicture))?;

		Ok(Self::new(mime_type, data))
	}

	/// Render the picture as a `data:` URL
	///
	/// Useful for handing the picture back to a UI for display.
	pub fn to_data_url(&self) -> String {
		format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.data))
	}

	/// Whether the picture holds no data
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}
