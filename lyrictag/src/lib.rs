//! Edit the tags, lyrics, and cover art of MP3 files.
//!
//! # Overview
//!
//! A file is split into its [`Metadata`](model::Metadata), taken from the ID3v2 tag at the
//! start of the file, and the audio that follows it. The metadata can be edited freely, and is
//! turned back into an ID3v2.3 tag that replaces the original one. The audio is never touched.
//!
//! Lyrics are kept in [groups](model::LyricGroup), one per language and description. Each group
//! holds timestamped lines, which can be imported from [LRC](lrc) text, and plain text.
//!
//! # Examples
//!
//! ## Reading and writing
//!
//! ```rust
//! use lyrictag::config::{ParseOptions, WriteOptions};
//! use lyrictag::model::TagField;
//!
//! # fn main() -> lyrictag::error::Result<()> {
//! # let bytes = [0xFF, 0xFB];
//! let mut file = lyrictag::decode(&bytes, ParseOptions::new());
//! if let Some(note) = &file.note {
//! 	println!("Existing metadata was ignored: {note}");
//! }
//!
//! file.metadata.fields.set(TagField::Artist, "Someone");
//! let tagged = lyrictag::encode(&file.metadata, &file.audio, WriteOptions::new())?;
//! # Ok(()) }
//! ```
//!
//! ## Importing lyrics
//!
//! ```rust
//! use lyrictag::model::Metadata;
//!
//! let mut metadata = Metadata::default();
//! metadata.lyrics.active_mut().synced = lyrictag::parse_lrc("[00:01.40]Hello\n[00:00.50]World");
//!
//! assert_eq!(metadata.lyrics.active().auto_unsynced_text(), "World\nHello");
//! ```
//!
//! # Important format-specific notes
//!
//! Only ID3v2.3 tags are read. Other ID3v2 versions are still recognized, and replaced on write.
//! See [`id3`] for more information.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod file;
pub mod lang;
pub mod lrc;
pub(crate) mod macros;
pub mod model;
pub mod picture;
pub mod session;
mod util;

pub mod id3;

pub use crate::file::{decode, encode};
pub use crate::lrc::{format_lrc_timestamp, parse_lrc};

pub use lang::Language;
pub use util::text::TextEncoding;
