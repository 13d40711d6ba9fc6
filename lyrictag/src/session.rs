//! Editing state for a single file at a time
//!
//! An [`EditorSession`] holds what an editor works on between loading a file and saving it.
//! Loading is split in two so callers can decode off the main thread: [`EditorSession::begin_load`]
//! hands out a [`LoadToken`], and only the result carrying the most recent token is installed.
//!
//! # Examples
//!
//! ```rust
//! use lyrictag::config::{ParseOptions, WriteOptions};
//! use lyrictag::session::{EditorSession, LoadOutcome};
//!
//! # fn main() -> lyrictag::error::Result<()> {
//! let mut session = EditorSession::new();
//!
//! let token = session.begin_load();
//! let decoded = lyrictag::decode(&[0xFF, 0xFB], ParseOptions::new());
//! assert_eq!(session.complete_load(token, "song.mp3", decoded), LoadOutcome::Installed);
//!
//! session.import_lrc("[00:00.50]Hello");
//! let processed = session.process(WriteOptions::new())?;
//! assert_eq!(processed.file_name, "song_tagged.mp3");
//! # Ok(()) }
//! ```

use crate::config::WriteOptions;
use crate::error::Result;
use crate::file::{DecodedFile, encode, suggested_file_name};
use crate::lrc::parse_lrc;
use crate::macros::err;
use crate::model::Metadata;

/// Identifies a load started with [`EditorSession::begin_load`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

/// What happened to a completed load
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
	/// The file is now being edited
	Installed,
	/// A newer load was started in the meantime, the result was dropped
	Stale,
}

/// The result of [`EditorSession::process`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedFile {
	/// The complete tagged file
	pub bytes: Vec<u8>,
	/// A name to save the file under, see [`suggested_file_name`]
	pub file_name: String,
}

#[derive(Debug)]
struct LoadedFile {
	name: String,
	decoded: DecodedFile,
}

/// The state of an editor
#[derive(Debug, Default)]
pub struct EditorSession {
	generation: u64,
	loaded: Option<LoadedFile>,
}

impl EditorSession {
	/// Create a session with no file loaded
	pub fn new() -> Self {
		Self::default()
	}

	/// Start loading a new file
	///
	/// Any load started before this one becomes stale.
	pub fn begin_load(&mut self) -> LoadToken {
		self.generation = self.generation.wrapping_add(1);
		LoadToken(self.generation)
	}

	/// Finish a load started with [`EditorSession::begin_load`]
	///
	/// The file replaces whatever was loaded, unless `token` is not from the most recent load.
	pub fn complete_load(
		&mut self,
		token: LoadToken,
		name: impl Into<String>,
		decoded: DecodedFile,
	) -> LoadOutcome {
		let name = name.into();
		if token.0 != self.generation {
			log::debug!(
				"Discarding stale load of {name:?} (load {}, current {})",
				token.0,
				self.generation
			);
			return LoadOutcome::Stale;
		}

		if let Some(note) = &decoded.note {
			log::debug!("Loaded {name:?} with a note: {note}");
		}

		self.loaded = Some(LoadedFile { name, decoded });
		LoadOutcome::Installed
	}

	/// Whether a file is loaded
	pub fn is_loaded(&self) -> bool {
		self.loaded.is_some()
	}

	/// The name of the loaded file
	pub fn file_name(&self) -> Option<&str> {
		self.loaded.as_ref().map(|l| l.name.as_str())
	}

	/// The note left by decoding the loaded file, if any
	pub fn note(&self) -> Option<&str> {
		self.loaded.as_ref().and_then(|l| l.decoded.note.as_deref())
	}

	/// The loaded file's metadata
	pub fn metadata(&self) -> Option<&Metadata> {
		self.loaded.as_ref().map(|l| &l.decoded.metadata)
	}

	/// The loaded file's metadata, mutably
	pub fn metadata_mut(&mut self) -> Option<&mut Metadata> {
		self.loaded.as_mut().map(|l| &mut l.decoded.metadata)
	}

	/// Replace the active lyric group's lines with parsed LRC text
	///
	/// Blank text, or having no file loaded, does nothing. Returns the number of lines imported.
	///
	/// The group's existing lines are discarded, even if `text` has no valid lines.
	pub fn import_lrc(&mut self, text: &str) -> usize {
		if text.trim().is_empty() {
			return 0;
		}

		let Some(metadata) = self.metadata_mut() else {
			log::debug!("Ignoring LRC import, no file is loaded");
			return 0;
		};

		let lines = parse_lrc(text);
		let count = lines.len();
		log::debug!("Imported {count} LRC lines");

		metadata.lyrics.active_mut().synced = lines;
		count
	}

	/// Create the tagged file
	///
	/// # Errors
	///
	/// * No file is loaded ([`NoFileLoaded`](crate::error::ErrorKind::NoFileLoaded))
	/// * See [`encode`]
	pub fn process(&self, write_options: WriteOptions) -> Result<ProcessedFile> {
		let Some(loaded) = &self.loaded else {
			err!(NoFileLoaded);
		};

		let metadata = &loaded.decoded.metadata;
		let bytes = encode(metadata, &loaded.decoded.audio, write_options)?;
		let file_name = suggested_file_name(metadata.fields.title.as_deref(), &loaded.name);

		Ok(ProcessedFile { bytes, file_name })
	}
}
