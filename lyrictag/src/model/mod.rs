//! The editable metadata of a file
//!
//! [`Metadata`] is what a file's tag looks like to an editor: a handful of text fields,
//! any number of [lyric groups](LyricGroups), and a single cover. It is converted to and
//! from an [`Id3v2Tag`] with [`Metadata::to_tag`] and [`Metadata::from_tag`].

mod fields;
mod lyrics;

pub use fields::{TagField, TagFields};
pub use lyrics::{LyricGroup, LyricGroups, SyncedLine};

use crate::config::WriteOptions;
use crate::id3::v2::{
	AttachedPictureFrame, CommentFrame, Frame, FrameId, Id3v2Tag, SyncTextContentType,
	SynchronizedTextFrame, TextInformationFrame, TimestampFormat, UnsynchronizedTextFrame,
};
use crate::lang::Language;
use crate::picture::{CoverArt, PictureType};

/// Read in place of `TDRC` when it is missing
const YEAR_FALLBACK_ID: FrameId = FrameId::from_static(b"TYER");

/// The metadata of a file
///
/// Equality ignores which lyric group is active, as that isn't stored in a tag.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
	/// The text fields
	pub fields: TagFields,
	/// The lyrics, always at least one group
	pub lyrics: LyricGroups,
	/// The front cover
	pub cover_art: Option<CoverArt>,
}

impl Metadata {
	/// Convert the metadata into an [`Id3v2Tag`]
	///
	/// Frames are created in this order:
	///
	/// * Text fields, skipping those that are blank (see [`TagField`])
	/// * For every lyric group, a `SYLT` frame if it has any lines, then a `USLT` frame if
	///   [`LyricGroup::auto_unsynced_text`] is not empty
	/// * An `APIC` front cover
	///
	/// The cover is left out if it has no data, or is larger than
	/// [`WriteOptions::max_picture_size`].
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::config::WriteOptions;
	/// use lyrictag::model::{Metadata, SyncedLine, TagField};
	///
	/// let mut metadata = Metadata::default();
	/// metadata.fields.set(TagField::Title, "Song");
	/// metadata.fields.set(TagField::Album, "  ");
	/// metadata.lyrics.active_mut().push_line(SyncedLine::new("Hello", 0));
	///
	/// let tag = metadata.to_tag(WriteOptions::default());
	///
	/// // TIT2, SYLT, and USLT
	/// assert_eq!(tag.len(), 3);
	/// ```
	pub fn to_tag(&self, write_options: WriteOptions) -> Id3v2Tag {
		let mut tag = Id3v2Tag::new();

		for (field, value) in self.fields.present() {
			let frame = match field {
				TagField::Comment => Frame::Comment(CommentFrame::new(
					Language::ENGLISH,
					String::new(),
					value.to_owned(),
				)),
				_ => Frame::Text(TextInformationFrame::new(field.frame_id(), value)),
			};

			let _ = tag.insert(frame);
		}

		for group in &self.lyrics {
			if !group.synced.is_empty() {
				let content = group
					.synced
					.iter()
					.map(|line| (line.timestamp_ms, line.text.clone()))
					.collect();

				let _ = tag.insert(Frame::SynchronizedText(SynchronizedTextFrame::new(
					group.language,
					TimestampFormat::MS,
					SyncTextContentType::Lyrics,
					group.description.clone(),
					content,
				)));
			}

			let unsynced = group.auto_unsynced_text();
			if !unsynced.is_empty() {
				let _ = tag.insert(Frame::UnsynchronizedText(UnsynchronizedTextFrame::new(
					group.language,
					group.description.clone(),
					unsynced.into_owned(),
				)));
			}
		}

		if let Some(cover) = &self.cover_art {
			if cover.is_empty() {
				log::warn!("Cover art has no data, it will not be written");
			} else if cover.data.len() > write_options.max_picture_size {
				log::warn!(
					"Cover art is {} bytes, the limit is {}, it will not be written",
					cover.data.len(),
					write_options.max_picture_size
				);
			} else {
				let mut cover = cover.clone();
				cover.picture_type = PictureType::CoverFront;
				let _ = tag.insert(Frame::Picture(AttachedPictureFrame::new(cover)));
			}
		}

		tag
	}

	/// Create metadata from an [`Id3v2Tag`]
	///
	/// * `TYER` is used for the year when `TDRC` is missing
	/// * The comment is the first `COMM` frame with an empty description, or the first one
	///   if none has one
	/// * `SYLT` and `USLT` frames sharing a language and description form a lyric group.
	///   Groups are ordered by their first frame. `SYLT` frames timed in MPEG frames are skipped.
	/// * A `USLT` frame holding exactly the text derived from its `SYLT` frame is treated as
	///   derived, leaving [`LyricGroup::unsynced`] blank
	/// * The cover is the front cover, or the first picture if there is none
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::config::WriteOptions;
	/// use lyrictag::model::{Metadata, SyncedLine, TagField};
	///
	/// let mut metadata = Metadata::default();
	/// metadata.fields.set(TagField::Artist, "Someone");
	/// metadata.lyrics.active_mut().push_line(SyncedLine::new("Hello", 0));
	///
	/// let tag = metadata.to_tag(WriteOptions::default());
	/// assert_eq!(Metadata::from_tag(&tag), metadata);
	/// ```
	pub fn from_tag(tag: &Id3v2Tag) -> Self {
		let mut fields = TagFields::default();
		for field in TagField::ALL {
			let value = match field {
				TagField::Comment => tag
					.comments()
					.find(|c| c.description.is_empty())
					.or_else(|| tag.comments().next())
					.map(|c| c.content.as_str()),
				TagField::Year => tag
					.get_text(field.frame_id())
					.or_else(|| tag.get_text(YEAR_FALLBACK_ID)),
				_ => tag.get_text(field.frame_id()),
			};

			if let Some(value) = value.filter(|v| !v.is_empty()) {
				fields.set(field, value);
			}
		}

		let cover_art = tag
			.pictures()
			.find(|p| p.picture.picture_type == PictureType::CoverFront)
			.or_else(|| tag.pictures().next())
			.map(|p| p.picture.clone());

		Self {
			fields,
			lyrics: read_lyric_groups(tag),
			cover_art,
		}
	}
}

struct PendingGroup {
	language: Language,
	description: String,
	synced: Option<Vec<SyncedLine>>,
	unsynced: Option<String>,
}

impl PendingGroup {
	fn new(language: Language, description: &str) -> Self {
		Self {
			language,
			description: description.to_owned(),
			synced: None,
			unsynced: None,
		}
	}

	fn matches(&self, language: Language, description: &str) -> bool {
		self.language == language && self.description == description
	}

	fn finish(self) -> LyricGroup {
		let synced = self.synced.unwrap_or_default();
		let mut unsynced = self.unsynced.unwrap_or_default();

		if !synced.is_empty() && unsynced == LyricGroup::join_lines(&synced) {
			unsynced.clear();
		}

		LyricGroup {
			language: self.language,
			description: self.description,
			synced,
			unsynced,
		}
	}
}

// The n-th SYLT and n-th USLT of a language/description are paired
fn read_lyric_groups(tag: &Id3v2Tag) -> LyricGroups {
	let mut pending: Vec<PendingGroup> = Vec::new();

	for frame in tag {
		match frame {
			Frame::SynchronizedText(sylt) => {
				if sylt.timestamp_format != TimestampFormat::MS {
					log::warn!(
						"Skipping SYLT frame ({}, {:?}) with MPEG frame timestamps",
						sylt.language,
						sylt.description
					);
					continue;
				}

				let lines = sylt
					.content
					.iter()
					.map(|(timestamp, text)| SyncedLine::new(text.clone(), *timestamp))
					.collect();

				let group = group_for(&mut pending, sylt.language, &sylt.description, |g| {
					g.synced.is_none()
				});
				group.synced = Some(lines);
			},
			Frame::UnsynchronizedText(uslt) => {
				let group = group_for(&mut pending, uslt.language, &uslt.description, |g| {
					g.unsynced.is_none()
				});
				group.unsynced = Some(uslt.content.clone());
			},
			_ => {},
		}
	}

	log::debug!("Found {} lyric groups", pending.len());

	pending
		.into_iter()
		.map(PendingGroup::finish)
		.collect::<Vec<_>>()
		.into()
}

fn group_for<'a, F>(
	pending: &'a mut Vec<PendingGroup>,
	language: Language,
	description: &str,
	has_room: F,
) -> &'a mut PendingGroup
where
	F: Fn(&PendingGroup) -> bool,
{
	match pending
		.iter()
		.position(|g| g.matches(language, description) && has_room(g))
	{
		Some(pos) => &mut pending[pos],
		None => {
			pending.push(PendingGroup::new(language, description));
			let last = pending.len() - 1;
			&mut pending[last]
		},
	}
}

#[cfg(test)]
mod tests {
	use super::{LyricGroup, Metadata, SyncedLine, TagField};
	use crate::config::WriteOptions;
	use crate::id3::v2::{
		AttachedPictureFrame, CommentFrame, Frame, FrameId, Id3v2Tag, SyncTextContentType,
		SynchronizedTextFrame, TextInformationFrame, TimestampFormat, UnsynchronizedTextFrame,
	};
	use crate::lang::Language;
	use crate::picture::{CoverArt, PictureType};

	fn sylt(lang: &str, desc: &str, format: TimestampFormat, lines: &[(u32, &str)]) -> Frame {
		Frame::SynchronizedText(SynchronizedTextFrame::new(
			Language::new(lang).unwrap(),
			format,
			SyncTextContentType::Lyrics,
			String::from(desc),
			lines.iter().map(|(t, s)| (*t, String::from(*s))).collect(),
		))
	}

	fn uslt(lang: &str, desc: &str, content: &str) -> Frame {
		Frame::UnsynchronizedText(UnsynchronizedTextFrame::new(
			Language::new(lang).unwrap(),
			String::from(desc),
			String::from(content),
		))
	}

	fn text(id: &str, value: &str) -> Frame {
		Frame::Text(TextInformationFrame::new(FrameId::new(id).unwrap(), value))
	}

	fn ids(tag: &Id3v2Tag) -> Vec<String> {
		tag.iter().map(|f| f.id().to_string()).collect()
	}

	#[test_log::test]
	fn empty_metadata_has_no_frames() {
		let tag = Metadata::default().to_tag(WriteOptions::default());
		assert!(tag.is_empty());
	}

	#[test_log::test]
	fn field_frames() {
		let mut metadata = Metadata::default();
		for field in TagField::ALL {
			metadata.fields.set(field, "value");
		}
		metadata.fields.set(TagField::Genre, "");

		let tag = metadata.to_tag(WriteOptions::default());
		assert_eq!(ids(&tag), ["TIT2", "TPE1", "TALB", "TPE2", "TDRC", "TRCK", "COMM"]);

		let comment = tag.comments().next().unwrap();
		assert_eq!(comment.language, Language::ENGLISH);
		assert!(comment.description.is_empty());
		assert_eq!(comment.content, "value");
	}

	#[test_log::test]
	fn lyric_frames_per_group() {
		let mut metadata = Metadata::default();
		metadata.lyrics.active_mut().push_line(SyncedLine::new("One", 100));

		let second = metadata.lyrics.add_group();
		second.language = Language::new("jpn").unwrap();
		second.unsynced = String::from("Plain only");

		// Neither lines nor text, writes nothing
		metadata.lyrics.add_group();

		let tag = metadata.to_tag(WriteOptions::default());
		assert_eq!(ids(&tag), ["SYLT", "USLT", "USLT"]);

		let sylt = tag.sync_text().next().unwrap();
		assert_eq!(sylt.timestamp_format, TimestampFormat::MS);
		assert_eq!(sylt.content_type, SyncTextContentType::Lyrics);
		assert_eq!(sylt.content, [(100, String::from("One"))]);

		let unsynced = tag.unsync_text().map(|f| f.content.as_str()).collect::<Vec<_>>();
		assert_eq!(unsynced, ["One", "Plain only"]);
	}

	#[test_log::test]
	fn cover_art_limits() {
		let mut metadata = Metadata::default();

		metadata.cover_art = Some(CoverArt::new("image/png", Vec::new()));
		assert!(metadata.to_tag(WriteOptions::default()).is_empty());

		metadata.cover_art = Some(CoverArt::new("image/png", vec![0; 16]));
		let options = WriteOptions::default().max_picture_size(15);
		assert!(metadata.to_tag(options).is_empty());

		let options = WriteOptions::default().max_picture_size(16);
		let tag = metadata.to_tag(options);
		assert_eq!(ids(&tag), ["APIC"]);
	}

	#[test_log::test]
	fn cover_is_written_as_front_cover() {
		let mut cover = CoverArt::new("image/jpeg", vec![1, 2, 3]);
		cover.picture_type = PictureType::Artist;

		let metadata = Metadata {
			cover_art: Some(cover),
			..Metadata::default()
		};

		let tag = metadata.to_tag(WriteOptions::default());
		let picture = tag.pictures().next().unwrap();
		assert_eq!(picture.picture.picture_type, PictureType::CoverFront);
	}

	#[test_log::test]
	fn year_fallback() {
		let mut tag = Id3v2Tag::new();
		let _ = tag.insert(text("TYER", "1999"));
		assert_eq!(Metadata::from_tag(&tag).fields.year.as_deref(), Some("1999"));

		let _ = tag.insert(text("TDRC", "2001"));
		assert_eq!(Metadata::from_tag(&tag).fields.year.as_deref(), Some("2001"));
	}

	#[test_log::test]
	fn comment_prefers_empty_description() {
		let mut tag = Id3v2Tag::new();
		let _ = tag.insert(Frame::Comment(CommentFrame::new(
			Language::ENGLISH,
			String::from("iTunNORM"),
			String::from("junk"),
		)));
		assert_eq!(Metadata::from_tag(&tag).fields.comment.as_deref(), Some("junk"));

		let _ = tag.insert(Frame::Comment(CommentFrame::new(
			Language::new("deu").unwrap(),
			String::new(),
			String::from("Kommentar"),
		)));
		assert_eq!(
			Metadata::from_tag(&tag).fields.comment.as_deref(),
			Some("Kommentar")
		);
	}

	#[test_log::test]
	fn lyric_pairing() {
		let mut tag = Id3v2Tag::new();
		let _ = tag.insert(uslt("jpn", "", "Japanese text"));
		let _ = tag.insert(sylt("eng", "", TimestampFormat::MS, &[(0, "a"), (10, "b")]));
		let _ = tag.insert(sylt("jpn", "", TimestampFormat::MS, &[(5, "あ")]));
		let _ = tag.insert(uslt("eng", "", "a\nb"));
		let _ = tag.insert(sylt("eng", "", TimestampFormat::MS, &[(20, "again")]));

		let metadata = Metadata::from_tag(&tag);
		let groups = metadata.lyrics.iter().collect::<Vec<_>>();
		assert_eq!(groups.len(), 3);

		assert_eq!(groups[0].language.as_str(), "jpn");
		assert_eq!(groups[0].synced, [SyncedLine::new("あ", 5)]);
		assert_eq!(groups[0].unsynced, "Japanese text");

		// Matches the derived text, so it isn't stored
		assert_eq!(groups[1].language, Language::ENGLISH);
		assert_eq!(groups[1].synced.len(), 2);
		assert!(groups[1].unsynced.is_empty());

		assert_eq!(groups[2].synced, [SyncedLine::new("again", 20)]);
		assert!(groups[2].unsynced.is_empty());

		assert_eq!(metadata.lyrics.active_index(), 0);
	}

	#[test_log::test]
	fn mpeg_timestamps_are_skipped() {
		let mut tag = Id3v2Tag::new();
		let _ = tag.insert(sylt("eng", "", TimestampFormat::MPEG, &[(3, "frames")]));

		let metadata = Metadata::from_tag(&tag);
		assert_eq!(metadata.lyrics.len(), 1);
		assert_eq!(metadata.lyrics.active(), &LyricGroup::default());
	}

	#[test_log::test]
	fn picks_front_cover() {
		let mut back = CoverArt::new("image/png", vec![1]);
		back.picture_type = PictureType::CoverBack;
		let front = CoverArt::new("image/png", vec![2]);

		let mut tag = Id3v2Tag::new();
		let _ = tag.insert(Frame::Picture(AttachedPictureFrame::new(back.clone())));
		assert_eq!(Metadata::from_tag(&tag).cover_art, Some(back));

		let _ = tag.insert(Frame::Picture(AttachedPictureFrame::new(front.clone())));
		assert_eq!(Metadata::from_tag(&tag).cover_art, Some(front));
	}

	#[test_log::test]
	fn round_trip() {
		let mut metadata = Metadata::default();
		metadata.fields.set(TagField::Title, "どうしてすぐ知ってしまうの");
		metadata.fields.set(TagField::Year, "2024");
		metadata.fields.set(TagField::Comment, "Nice");

		let group = metadata.lyrics.active_mut();
		group.push_line(SyncedLine::new("late", 900));
		group.push_line(SyncedLine::new("early", 100));
		group.push_line(SyncedLine::new("early", 100));

		let second = metadata.lyrics.add_group();
		second.language = Language::new("fra").unwrap();
		second.description = String::from("traduction");
		second.unsynced = String::from("Bonjour");

		metadata.cover_art = Some(CoverArt::new("image/jpeg", vec![0xFF, 0xD8]));

		let tag = metadata.to_tag(WriteOptions::default());
		assert_eq!(Metadata::from_tag(&tag), metadata);
	}
}
