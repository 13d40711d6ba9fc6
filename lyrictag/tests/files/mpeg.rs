use crate::util::{AUDIO, frame, id3v2, round_trip};

use lyrictag::config::{ParseOptions, ParsingMode, WriteOptions};
use lyrictag::file::{AudioPayload, DecodedFile, read_tag};
use lyrictag::id3::v2::{Frame, FrameId, SynchronizedTextFrame};
use lyrictag::model::{LyricGroup, Metadata, SyncedLine, TagField};
use lyrictag::picture::{CoverArt, PictureType};
use lyrictag::{Language, TextEncoding};

#[test_log::test]
fn no_tag() {
	let file = lyrictag::decode(AUDIO, ParseOptions::new());
	assert_eq!(file.metadata, Metadata::default());
	assert!(file.note.is_none());
	assert_eq!(file.audio.as_bytes(), AUDIO);
}

#[test_log::test]
fn empty_metadata() {
	let bytes = lyrictag::encode(
		&Metadata::default(),
		&AudioPayload::from(AUDIO.to_vec()),
		WriteOptions::new(),
	)
	.unwrap();

	assert_eq!(bytes.len(), 10 + AUDIO.len());
	assert_eq!(&bytes[..10], b"ID3\x03\x00\x00\x00\x00\x00\x00");
	assert_eq!(&bytes[10..], AUDIO);
}

#[test_log::test]
fn basic_round_trip() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "Title");
	metadata.fields.set(TagField::Artist, "Artist");
	metadata.fields.set(TagField::Album, "Album");

	let group = metadata.lyrics.active_mut();
	group.push_line(SyncedLine::new("World", 500));
	group.push_line(SyncedLine::new("Hello", 1400));

	let (_, decoded) = round_trip(&metadata);
	assert_eq!(decoded.metadata, metadata);
}

#[test_log::test]
fn non_latin_title() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "どうしてすぐ知ってしまうの");

	let (bytes, decoded) = round_trip(&metadata);
	assert_eq!(
		decoded.metadata.fields.title.as_deref(),
		Some("どうしてすぐ知ってしまうの")
	);

	// Written as UTF-16 with a BOM
	let frame_body = &bytes[20..];
	assert_eq!(frame_body[0], TextEncoding::UTF16 as u8);
	assert_eq!(&frame_body[1..3], [0xFF_u8, 0xFE]);
}

#[test_log::test]
fn zero_width_no_break_space_survives() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "a\u{FEFF}bどう");

	let group = metadata.lyrics.active_mut();
	group.description = String::from("\u{FEFF}");
	group.push_line(SyncedLine::new("\u{FEFF}あ", 0));
	group.push_line(SyncedLine::new("い\u{FEFF}", 1000));

	let (_, decoded) = round_trip(&metadata);
	assert_eq!(decoded.metadata.fields.title.as_deref(), Some("a\u{FEFF}bどう"));
	assert_eq!(decoded.metadata, metadata);
}

#[test_log::test]
fn latin1_text_is_latin1() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Artist, "Beyoncé");

	let (bytes, _) = round_trip(&metadata);
	let frame_body = &bytes[20..];
	assert_eq!(frame_body[0], TextEncoding::Latin1 as u8);
	assert_eq!(&frame_body[1..8], b"Beyonc\xE9");
}

#[test_log::test]
fn frame_layout() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "Hi");

	let audio = AudioPayload::from(Vec::new());
	let bytes = lyrictag::encode(&metadata, &audio, WriteOptions::new()).unwrap();

	let mut expected = id3v2(3, 0, &frame(b"TIT2", 0, b"\x00Hi"));
	assert_eq!(bytes, expected);

	expected.extend(AUDIO);
	assert_eq!(read_tag(&expected, ParseOptions::new()).unwrap().unwrap().len(), 1);
}

#[test_log::test]
fn multiple_lyric_groups() {
	let mut metadata = Metadata::default();
	metadata.lyrics.active_mut().push_line(SyncedLine::new("Hello", 0));

	let japanese = metadata.lyrics.add_group();
	japanese.language = Language::new("jpn").unwrap();
	japanese.push_line(SyncedLine::new("こんにちは", 0));
	japanese.unsynced = String::from("こんにちは (plain)");

	let romaji = metadata.lyrics.add_group();
	romaji.language = Language::new("jpn").unwrap();
	romaji.description = String::from("romaji");
	romaji.push_line(SyncedLine::new("konnichiwa", 0));

	let (bytes, decoded) = round_trip(&metadata);
	assert_eq!(decoded.metadata.lyrics.len(), 3);
	assert_eq!(decoded.metadata, metadata);

	let tag = read_tag(&bytes, ParseOptions::new()).unwrap().unwrap();
	assert_eq!(tag.sync_text().count(), 3);
	assert_eq!(tag.unsync_text().count(), 3);
}

#[test_log::test]
fn duplicate_timestamps_keep_order() {
	let mut metadata = Metadata::default();
	let group = metadata.lyrics.active_mut();
	group.push_line(SyncedLine::new("late", 2000));
	group.push_line(SyncedLine::new("a", 1000));
	group.push_line(SyncedLine::new("b", 1000));

	let (bytes, decoded) = round_trip(&metadata);
	assert_eq!(decoded.metadata.lyrics.active().synced, metadata.lyrics.active().synced);

	let tag = read_tag(&bytes, ParseOptions::new()).unwrap().unwrap();
	let sylt = tag.sync_text().next().unwrap();
	let timestamps = sylt.content.iter().map(|(t, _)| *t).collect::<Vec<_>>();
	assert_eq!(timestamps, [2000, 1000, 1000]);
}

#[test_log::test]
fn cover_art() {
	let mut metadata = Metadata::default();
	metadata.cover_art = Some(CoverArt::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap());

	let (bytes, decoded) = round_trip(&metadata);
	let cover = decoded.metadata.cover_art.unwrap();
	assert_eq!(cover.mime_type, "image/png");
	assert_eq!(cover.picture_type, PictureType::CoverFront);
	assert_eq!(cover.data, b"\x89PNG\r\n\x1A\n");

	// Not read when disabled
	let file = lyrictag::decode(&bytes, ParseOptions::new().read_cover_art(false));
	assert!(file.metadata.cover_art.is_none());
}

#[test_log::test]
fn oversized_cover_art_is_dropped() {
	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "Title");
	metadata.cover_art = Some(CoverArt::new("image/jpeg", vec![0; 1024]));

	let audio = AudioPayload::from(AUDIO.to_vec());
	let bytes =
		lyrictag::encode(&metadata, &audio, WriteOptions::new().max_picture_size(1023)).unwrap();

	let decoded = lyrictag::decode(&bytes, ParseOptions::new());
	assert_eq!(decoded.metadata.fields.title.as_deref(), Some("Title"));
	assert!(decoded.metadata.cover_art.is_none());
}

#[test_log::test]
fn corrupt_tag() {
	// A SYLT frame too short to hold its fixed fields
	let body = frame(b"SYLT", 0, b"\x00eng");
	let mut bytes = id3v2(3, 0, &body);
	bytes.extend(AUDIO);

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let file = lyrictag::decode(&bytes, strict);
	assert_eq!(file.metadata, Metadata::default());
	assert!(file.note.is_some());
	assert_eq!(file.audio.as_bytes(), AUDIO);

	// The frame is skipped otherwise
	let file = lyrictag::decode(&bytes, ParseOptions::new());
	assert!(file.note.is_none());
	assert_eq!(file.metadata, Metadata::default());

	// Or kept as-is
	let relaxed = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	let tag = read_tag(&bytes, relaxed).unwrap().unwrap();
	assert!(matches!(tag.iter().next(), Some(Frame::Binary(_))));
}

#[test_log::test]
fn truncated_frame() {
	// The frame claims 100 bytes, but the tag body ends after 3
	let mut body = b"TIT2".to_vec();
	body.extend(100_u32.to_be_bytes());
	body.extend([0, 0]);
	body.extend(b"\x00Hi");
	assert_eq!(body.len(), 13);

	let mut bytes = id3v2(3, 0, &body);
	bytes.extend(AUDIO);

	for mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let file = lyrictag::decode(&bytes, ParseOptions::new().parsing_mode(mode));
		assert_eq!(file.metadata, Metadata::default());
		assert!(file.note.is_some());
		assert_eq!(file.audio.as_bytes(), AUDIO);
	}
}

#[test_log::test]
fn other_versions_are_replaced() {
	let mut original = id3v2(4, 0, &frame(b"TIT2", 0, b"\x03Old"));
	original.extend(AUDIO);

	let file = lyrictag::decode(&original, ParseOptions::new());
	assert!(file.note.is_some());
	assert_eq!(file.audio.as_bytes(), AUDIO);

	let bytes = lyrictag::encode(&file.metadata, &file.audio, WriteOptions::new()).unwrap();
	assert_eq!(&bytes[..5], b"ID3\x03\x00");
	assert_eq!(&bytes[10..], AUDIO);
}

#[test_log::test]
fn unsynchronised_tag() {
	// The frame size describes the content before unsynchronisation
	let mut body = b"TIT2\x00\x00\x00\x03\x00\x00".to_vec();
	body.extend(b"\x00\xFF\x00\xE9");
	let mut bytes = id3v2(3, 0x80, &body);
	bytes.extend(AUDIO);

	let file = lyrictag::decode(&bytes, ParseOptions::new());
	assert!(file.note.is_none(), "{:?}", file.note);
	assert_eq!(file.metadata.fields.title.as_deref(), Some("ÿé"));
}

#[test_log::test]
fn foreign_frames_and_mpeg_sylt_are_ignored() {
	let mut sylt = SynchronizedTextFrame::new(
		Language::ENGLISH,
		lyrictag::id3::v2::TimestampFormat::MPEG,
		lyrictag::id3::v2::SyncTextContentType::Lyrics,
		String::new(),
		vec![(1152, String::from("frames"))],
	);
	sylt.description = String::from("mpeg");
	let sylt_body = Frame::SynchronizedText(sylt).as_bytes().unwrap();

	let mut body = frame(b"PRIV", 0, b"owner\0data");
	body.extend(frame(b"SYLT", 0, &sylt_body));
	body.extend(frame(b"TYER", 0, b"\x001999"));

	let mut bytes = id3v2(3, 0, &body);
	bytes.extend(AUDIO);

	let file = lyrictag::decode(&bytes, ParseOptions::new());
	assert_eq!(file.metadata.fields.year.as_deref(), Some("1999"));
	assert_eq!(file.metadata.lyrics.len(), 1);
	assert_eq!(file.metadata.lyrics.active(), &LyricGroup::default());

	let tag = read_tag(&bytes, ParseOptions::new()).unwrap().unwrap();
	assert!(tag.get(FrameId::new("PRIV").unwrap()).is_some());
}

#[test_log::test]
fn path_helpers() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("song.mp3");

	let mut file = DecodedFile {
		audio: AudioPayload::from(AUDIO.to_vec()),
		..DecodedFile::default()
	};
	file.metadata.fields.set(TagField::Genre, "Pop");
	file.save_to_path(&path, WriteOptions::new()).unwrap();

	let read = DecodedFile::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(read, file);

	assert!(DecodedFile::read_from_path(dir.path().join("missing.mp3"), ParseOptions::new()).is_err());
}
