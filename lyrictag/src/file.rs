//! Reading and writing whole files
//!
//! Files are handled entirely in memory. Reading splits a file into its [`Metadata`] and
//! the [`AudioPayload`] that follows the tag. Writing puts a freshly assembled ID3v2.3 tag
//! in front of the untouched audio.
//!
//! # Examples
//!
//! ```rust
//! use lyrictag::config::{ParseOptions, WriteOptions};
//! use lyrictag::model::TagField;
//!
//! # fn main() -> lyrictag::error::Result<()> {
//! let audio = [0xFF, 0xFB, 0x90, 0x00];
//!
//! let mut file = lyrictag::decode(&audio, ParseOptions::new());
//! assert!(file.note.is_none());
//!
//! file.metadata.fields.set(TagField::Title, "Song");
//! let tagged = lyrictag::encode(&file.metadata, &file.audio, WriteOptions::new())?;
//!
//! assert!(tagged.starts_with(b"ID3\x03\x00"));
//! assert!(tagged.ends_with(&audio));
//! # Ok(()) }
//! ```

use crate::config::{ParseOptions, WriteOptions};
use crate::error::Result;
use crate::id3::find_id3v2;
use crate::id3::v2::Id3v2Tag;
use crate::id3::v2::read::parse_id3v2;
use crate::id3::v2::write::create_tag;
use crate::model::Metadata;

use std::path::Path;

/// The bytes of a file following its ID3v2 tag
///
/// This is never inspected or modified, it is only carried over to the output.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct AudioPayload {
	data: Vec<u8>,
}

impl std::fmt::Debug for AudioPayload {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "AudioPayload(<{} bytes>)", self.data.len())
	}
}

impl From<Vec<u8>> for AudioPayload {
	fn from(data: Vec<u8>) -> Self {
		Self { data }
	}
}

impl AudioPayload {
	/// The audio bytes
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// The length of the audio, in bytes
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether there is no audio
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Take the audio bytes
	pub fn into_inner(self) -> Vec<u8> {
		self.data
	}
}

/// A file split into its metadata and audio
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DecodedFile {
	/// The file's metadata, or defaults if it had no readable tag
	pub metadata: Metadata,
	/// Everything after the tag
	pub audio: AudioPayload,
	/// Why the existing metadata couldn't be used, if applicable
	pub note: Option<String>,
}

impl DecodedFile {
	/// Read and decode the file at `path`
	///
	/// # Errors
	///
	/// * `path` cannot be read
	///
	/// See [`decode`] for how the contents are handled.
	pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Reading {}", path.display());

		let bytes = std::fs::read(path)?;
		Ok(decode(&bytes, parse_options))
	}

	/// Encode the file and write it to `path`
	///
	/// Any existing file at `path` is replaced.
	///
	/// # Errors
	///
	/// * See [`encode`]
	/// * `path` cannot be written
	pub fn save_to_path<P>(&self, path: P, write_options: WriteOptions) -> Result<()>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		let bytes = encode(&self.metadata, &self.audio, write_options)?;

		log::debug!("Writing {} bytes to {}", bytes.len(), path.display());
		std::fs::write(path, bytes)?;
		Ok(())
	}
}

/// Read the ID3v2 tag at the start of `bytes`
///
/// This returns `Ok(None)` if there is no tag.
///
/// # Errors
///
/// * The tag is not ID3v2.3
/// * The tag is malformed, see [`ParsingMode`](crate::config::ParsingMode)
pub fn read_tag(bytes: &[u8], parse_options: ParseOptions) -> Result<Option<Id3v2Tag>> {
	let found = find_id3v2(bytes);
	let Some(header) = found.header else {
		return Ok(None);
	};

	parse_id3v2(found.content, header, parse_options).map(Some)
}

/// Split a file into its metadata and audio
///
/// This never fails. If the file has no tag, or its tag cannot be read, the metadata is
/// left at its defaults. In the latter case, [`DecodedFile::note`] says why.
///
/// An unreadable tag is still removed from the audio, as long as its header is valid.
pub fn decode(bytes: &[u8], parse_options: ParseOptions) -> DecodedFile {
	let found = find_id3v2(bytes);
	let audio = AudioPayload::from(found.audio.to_vec());

	let Some(header) = found.header else {
		let note = bytes.starts_with(b"ID3").then(|| {
			log::warn!("File starts with an invalid ID3v2 tag, keeping it as audio");
			String::from("Found an invalid ID3v2 tag, existing metadata was ignored")
		});

		return DecodedFile {
			metadata: Metadata::default(),
			audio,
			note,
		};
	};

	match parse_id3v2(found.content, header, parse_options) {
		Ok(tag) => DecodedFile {
			metadata: Metadata::from_tag(&tag),
			audio,
			note: None,
		},
		Err(err) => {
			log::warn!("Failed to read existing tag: {err}");
			DecodedFile {
				metadata: Metadata::default(),
				audio,
				note: Some(format!(
					"Unable to read existing metadata ({err}), starting empty"
				)),
			}
		},
	}
}

/// Create a file from metadata and audio
///
/// The output is an ID3v2.3 tag followed by `audio`, byte for byte.
///
/// # Errors
///
/// * A frame is too large for its size field, or the tag is too large for its header
///   ([`TooMuchData`](crate::error::ErrorKind::TooMuchData))
pub fn encode(
	metadata: &Metadata,
	audio: &AudioPayload,
	write_options: WriteOptions,
) -> Result<Vec<u8>> {
	let tag = metadata.to_tag(write_options);
	let mut bytes = create_tag(&tag)?;

	bytes.reserve(audio.len());
	bytes.extend_from_slice(audio.as_bytes());
	Ok(bytes)
}

/// Name the output of an edited file
///
/// This is `<title>_tagged.mp3`, or `<original name>_tagged.mp3` if `title` is blank.
/// A trailing `.mp3` is dropped from the original name, and path separators in the title
/// are replaced with `_`.
///
/// # Examples
///
/// ```rust
/// use lyrictag::file::suggested_file_name;
///
/// assert_eq!(suggested_file_name(Some("AC/DC"), "song.mp3"), "AC_DC_tagged.mp3");
/// assert_eq!(suggested_file_name(None, "song.mp3"), "song_tagged.mp3");
/// ```
pub fn suggested_file_name(title: Option<&str>, original_name: &str) -> String {
	let stem = match title.map(str::trim).filter(|t| !t.is_empty()) {
		Some(title) => title.replace(['/', '\\'], "_"),
		None => {
			let name = Path::new(original_name)
				.file_name()
				.and_then(|n| n.to_str())
				.unwrap_or(original_name);

			strip_mp3_extension(name).to_owned()
		},
	};

	format!("{stem}_tagged.mp3")
}

fn strip_mp3_extension(name: &str) -> &str {
	let split = name.len().saturating_sub(4);
	match name.get(split..) {
		Some(ext) if ext.eq_ignore_ascii_case(".mp3") => &name[..split],
		_ => name,
	}
}
