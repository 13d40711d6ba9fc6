use super::header::Id3v2TagFlags;
use super::items::{
	AttachedPictureFrame, CommentFrame, SynchronizedTextFrame, TextInformationFrame,
	UnsynchronizedTextFrame,
};
use super::{Frame, FrameId};
use crate::picture::PictureType;

/// An `ID3v2` tag
///
/// Frames are kept in the order they were read or inserted, which is also the order
/// they are written in.
///
/// ## Supported frames
///
/// * Text frames (`T...`, excluding `TXXX`)
/// * `COMM`, told apart by its language and description
/// * `USLT` and `SYLT`, any number of them, in pairs belonging to a lyric group
/// * `APIC`, told apart by its picture type
///
/// Anything else is kept as a [`BinaryFrame`](crate::id3::v2::BinaryFrame).
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Id3v2Tag {
	flags: Id3v2TagFlags,
	pub(crate) frames: Vec<Frame>,
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// Create a new empty `Id3v2Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::Id3v2Tag;
	///
	/// let id3v2_tag = Id3v2Tag::new();
	/// assert!(id3v2_tag.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the [`Id3v2TagFlags`] the tag was read with
	pub fn flags(&self) -> &Id3v2TagFlags {
		&self.flags
	}

	/// Restrict the tag's flags
	pub fn set_flags(&mut self, flags: Id3v2TagFlags) {
		self.flags = flags
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag has no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Iterate over the frames in order
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}
}

impl Id3v2Tag {
	/// Gets the first [`Frame`] with an id
	pub fn get(&self, id: FrameId) -> Option<&Frame> {
		self.frames.iter().find(|f| f.id() == id)
	}

	/// Gets the text for a frame
	///
	/// NOTE: This will not work for `TXXX` frames, which are kept as binary.
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::{FrameId, Id3v2Tag, TextInformationFrame};
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let title_id = FrameId::new("TIT2")?;
	///
	/// let mut tag = Id3v2Tag::new();
	/// tag.insert(TextInformationFrame::new(title_id, "Foo").into());
	///
	/// assert_eq!(tag.get_text(title_id), Some("Foo"));
	/// # Ok(()) }
	/// ```
	pub fn get_text(&self, id: FrameId) -> Option<&str> {
		if let Some(Frame::Text(TextInformationFrame { value, .. })) = self.get(id) {
			return Some(value);
		}

		None
	}

	/// Inserts a [`Frame`]
	///
	/// This will replace any frame occupying the same slot: the same ID for text frames,
	/// the same language and description for `COMM`, or the same picture type for `APIC`.
	/// The new frame takes the replaced frame's position.
	///
	/// `USLT`, `SYLT`, and binary frames are always appended.
	pub fn insert(&mut self, frame: Frame) -> Option<Frame> {
		match self.frames.iter().position(|f| f.same_slot(&frame)) {
			Some(pos) => Some(std::mem::replace(&mut self.frames[pos], frame)),
			None => {
				self.frames.push(frame);
				None
			},
		}
	}

	/// Removes every [`Frame`] with the given id
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::{Frame, FrameId, Id3v2Tag, TextInformationFrame};
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let mood_id = FrameId::new("TMOO")?;
	///
	/// let mut tag = Id3v2Tag::new();
	/// let mood_frame = Frame::Text(TextInformationFrame::new(mood_id, "Calm"));
	///
	/// let _ = tag.insert(mood_frame.clone());
	/// assert_eq!(tag.remove(mood_id), vec![mood_frame]);
	/// assert!(tag.is_empty());
	/// # Ok(()) }
	/// ```
	pub fn remove(&mut self, id: FrameId) -> Vec<Frame> {
		let (removed, kept) = std::mem::take(&mut self.frames)
			.into_iter()
			.partition(|f| f.id() == id);

		self.frames = kept;
		removed
	}

	/// Retains [`Frame`]s by evaluating the predicate
	pub fn retain<P>(&mut self, predicate: P)
	where
		P: FnMut(&Frame) -> bool,
	{
		self.frames.retain(predicate)
	}

	/// Returns all `COMM` frames
	pub fn comments(&self) -> impl Iterator<Item = &CommentFrame> {
		self.frames.iter().filter_map(|f| match f {
			Frame::Comment(val) => Some(val),
			_ => None,
		})
	}

	/// Returns all `USLT` frames
	pub fn unsync_text(&self) -> impl Iterator<Item = &UnsynchronizedTextFrame> + Clone {
		self.frames.iter().filter_map(|f| match f {
			Frame::UnsynchronizedText(val) => Some(val),
			_ => None,
		})
	}

	/// Returns all `SYLT` frames
	pub fn sync_text(&self) -> impl Iterator<Item = &SynchronizedTextFrame> + Clone {
		self.frames.iter().filter_map(|f| match f {
			Frame::SynchronizedText(val) => Some(val),
			_ => None,
		})
	}

	/// Returns all `APIC` frames
	pub fn pictures(&self) -> impl Iterator<Item = &AttachedPictureFrame> {
		self.frames.iter().filter_map(|f| match f {
			Frame::Picture(val) => Some(val),
			_ => None,
		})
	}

	/// Removes a certain [`PictureType`]
	pub fn remove_picture_type(&mut self, picture_type: PictureType) {
		self.frames.retain(|f| {
			!matches!(f, Frame::Picture(AttachedPictureFrame { picture, .. }) if picture.picture_type == picture_type)
		})
	}
}
