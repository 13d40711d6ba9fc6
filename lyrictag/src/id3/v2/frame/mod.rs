pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	AttachedPictureFrame, BinaryFrame, CommentFrame, SynchronizedTextFrame, TextInformationFrame,
	UnsynchronizedTextFrame,
};
use crate::error::Result;
use header::{FrameFlags, FrameId};

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
		}

		impl Frame {
			/// Get the ID of the frame
			pub fn id(&self) -> FrameId {
				match self {
					$(
						Frame::$variant(frame) => frame.header.id,
					)*
				}
			}

			/// Get the flags for the frame
			pub fn flags(&self) -> FrameFlags {
				match self {
					$(
						Frame::$variant(frame) => frame.flags(),
					)*
				}
			}

			/// Set the flags for the frame
			pub fn set_flags(&mut self, flags: FrameFlags) {
				match self {
					$(
						Frame::$variant(frame) => frame.set_flags(flags),
					)*
				}
			}
		}

		$(
			impl From<$type> for Frame {
				fn from(value: $type) -> Self {
					Frame::$variant(value)
				}
			}
		)*
	}
}

define_frames! {
	/// Represents an `ID3v2` frame
	///
	/// Only the frames needed for tag fields, lyrics, and cover art are decoded. Everything
	/// else is carried as a [`BinaryFrame`].
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum Frame {
		/// Represents a "COMM" frame
		Comment(CommentFrame),
		/// Represents a "USLT" frame
		UnsynchronizedText(UnsynchronizedTextFrame),
		/// Represents a "SYLT" frame
		SynchronizedText(SynchronizedTextFrame),
		/// Represents a "T..." (excluding TXXX) frame
		Text(TextInformationFrame),
		/// Represents an "APIC" frame
		Picture(AttachedPictureFrame),
		/// Binary data
		///
		/// NOTES:
		///
		/// * This is used for unknown frames
		/// * This is used for encrypted frames
		Binary(BinaryFrame),
	}
}

impl Frame {
	/// Encode the frame content
	///
	/// NOTE: This does not include the frame header
	///
	/// # Errors
	///
	/// * The content is too large to be described by a frame header
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		Ok(match self {
			Frame::Comment(comment) => comment.as_bytes(),
			Frame::UnsynchronizedText(lyrics) => lyrics.as_bytes(),
			Frame::SynchronizedText(lyrics) => lyrics.as_bytes()?,
			Frame::Text(text) => text.as_bytes(),
			Frame::Picture(picture) => picture.as_bytes()?,
			Frame::Binary(binary) => binary.as_bytes(),
		})
	}
}

impl Frame {
	// Whether `other` would take this frame's place in a tag
	//
	// Text frames are unique by ID, comments by language and description, and pictures by
	// their type. Lyric frames belong to lyric groups, which may repeat a language and
	// description, so they never collide. Neither do binary frames.
	pub(crate) fn same_slot(&self, other: &Frame) -> bool {
		match (self, other) {
			(Frame::Text(a), Frame::Text(b)) => a.header.id == b.header.id,
			(Frame::Comment(a), Frame::Comment(b)) => {
				a.language == b.language && a.description == b.description
			},
			(Frame::Picture(a), Frame::Picture(b)) => {
				a.picture.picture_type == b.picture.picture_type
			},
			_ => false,
		}
	}

	pub(crate) fn is_empty(&self) -> bool {
		match self {
			Frame::Text(text) => text.value.is_empty(),
			Frame::Comment(comment) => comment.content.is_empty(),
			Frame::UnsynchronizedText(lyrics) => lyrics.content.is_empty(),
			Frame::SynchronizedText(lyrics) => lyrics.content.is_empty(),
			Frame::Picture(picture) => picture.picture.data.is_empty(),
			Frame::Binary(binary) => binary.data.is_empty(),
		}
	}
}
