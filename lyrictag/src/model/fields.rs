use crate::id3::v2::FrameId;

/// A textual tag field
///
/// Every field is stored in exactly one frame, see [`TagField::frame_id`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagField {
	/// The track title (`TIT2`)
	Title,
	/// The track artist (`TPE1`)
	Artist,
	/// The album title (`TALB`)
	Album,
	/// The album artist (`TPE2`)
	AlbumArtist,
	/// The genre (`TCON`)
	Genre,
	/// The recording year (`TDRC`)
	Year,
	/// The track number (`TRCK`)
	Track,
	/// A comment (`COMM`, English, with an empty description)
	Comment,
}

impl TagField {
	/// Every field, in the order their frames are written
	pub const ALL: [TagField; 8] = [
		TagField::Title,
		TagField::Artist,
		TagField::Album,
		TagField::AlbumArtist,
		TagField::Genre,
		TagField::Year,
		TagField::Track,
		TagField::Comment,
	];

	/// The ID of the frame the field is stored in
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::model::TagField;
	///
	/// assert_eq!(TagField::Title.frame_id(), "TIT2");
	/// assert_eq!(TagField::Comment.frame_id(), "COMM");
	/// ```
	pub const fn frame_id(self) -> FrameId {
		match self {
			TagField::Title => FrameId::from_static(b"TIT2"),
			TagField::Artist => FrameId::from_static(b"TPE1"),
			TagField::Album => FrameId::from_static(b"TALB"),
			TagField::AlbumArtist => FrameId::from_static(b"TPE2"),
			TagField::Genre => FrameId::from_static(b"TCON"),
			TagField::Year => FrameId::from_static(b"TDRC"),
			TagField::Track => FrameId::from_static(b"TRCK"),
			TagField::Comment => FrameId::from_static(b"COMM"),
		}
	}
}

/// The textual fields of a file
///
/// A field that is `None`, or only whitespace, is not written.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TagFields {
	/// See [`TagField::Title`]
	pub title: Option<String>,
	/// See [`TagField::Artist`]
	pub artist: Option<String>,
	/// See [`TagField::Album`]
	pub album: Option<String>,
	/// See [`TagField::AlbumArtist`]
	pub album_artist: Option<String>,
	/// See [`TagField::Year`]
	pub year: Option<String>,
	/// See [`TagField::Genre`]
	pub genre: Option<String>,
	/// See [`TagField::Track`]
	pub track: Option<String>,
	/// See [`TagField::Comment`]
	pub comment: Option<String>,
}

impl TagFields {
	/// Get the value of a field
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::model::{TagField, TagFields};
	///
	/// let mut fields = TagFields::default();
	/// fields.set(TagField::Artist, "Someone");
	///
	/// assert_eq!(fields.get(TagField::Artist), Some("Someone"));
	/// assert_eq!(fields.get(TagField::Title), None);
	/// ```
	pub fn get(&self, field: TagField) -> Option<&str> {
		match field {
			TagField::Title => self.title.as_deref(),
			TagField::Artist => self.artist.as_deref(),
			TagField::Album => self.album.as_deref(),
			TagField::AlbumArtist => self.album_artist.as_deref(),
			TagField::Genre => self.genre.as_deref(),
			TagField::Year => self.year.as_deref(),
			TagField::Track => self.track.as_deref(),
			TagField::Comment => self.comment.as_deref(),
		}
	}

	/// Set the value of a field
	pub fn set(&mut self, field: TagField, value: impl Into<String>) {
		*self.slot_mut(field) = Some(value.into());
	}

	/// Remove the value of a field, returning it
	pub fn clear(&mut self, field: TagField) -> Option<String> {
		self.slot_mut(field).take()
	}

	/// Iterate over the fields that will be written, in order
	///
	/// Fields that are only whitespace are skipped.
	pub fn present(&self) -> impl Iterator<Item = (TagField, &str)> + '_ {
		TagField::ALL.into_iter().filter_map(|field| {
			self.get(field)
				.filter(|value| !value.trim().is_empty())
				.map(|value| (field, value))
		})
	}

	fn slot_mut(&mut self, field: TagField) -> &mut Option<String> {
		match field {
			TagField::Title => &mut self.title,
			TagField::Artist => &mut self.artist,
			TagField::Album => &mut self.album,
			TagField::AlbumArtist => &mut self.album_artist,
			TagField::Genre => &mut self.genre,
			TagField::Year => &mut self.year,
			TagField::Track => &mut self.track,
			TagField::Comment => &mut self.comment,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{TagField, TagFields};

	#[test_log::test]
	fn frame_ids_are_unique() {
		let mut ids = TagField::ALL.map(|f| f.frame_id().as_str().to_owned()).to_vec();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), TagField::ALL.len());
	}

	#[test_log::test]
	fn every_field_has_its_own_slot() {
		let mut fields = TagFields::default();
		for field in TagField::ALL {
			fields.set(field, format!("{field:?}"));
		}

		for field in TagField::ALL {
			assert_eq!(fields.get(field), Some(format!("{field:?}").as_str()));
		}
	}

	#[test_log::test]
	fn present_skips_blank_values() {
		let mut fields = TagFields::default();
		fields.set(TagField::Title, "Title");
		fields.set(TagField::Album, "   ");
		fields.set(TagField::Track, "3");

		let present = fields.present().collect::<Vec<_>>();
		assert_eq!(present, [(TagField::Title, "Title"), (TagField::Track, "3")]);

		assert_eq!(fields.clear(TagField::Album).as_deref(), Some("   "));
		assert_eq!(fields.get(TagField::Album), None);
	}
}
