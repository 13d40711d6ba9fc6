use crate::util::{AUDIO, round_trip};

use lyrictag::config::{ParseOptions, WriteOptions};
use lyrictag::error::ErrorKind;
use lyrictag::model::{Metadata, TagField};
use lyrictag::session::{EditorSession, LoadOutcome};

#[test_log::test]
fn edit_and_process() {
	let mut session = EditorSession::new();
	assert!(!session.is_loaded());

	let token = session.begin_load();
	let decoded = lyrictag::decode(AUDIO, ParseOptions::new());
	assert_eq!(
		session.complete_load(token, "track01.mp3", decoded),
		LoadOutcome::Installed
	);

	let metadata = session.metadata_mut().unwrap();
	metadata.fields.set(TagField::Title, "Song");
	assert_eq!(session.import_lrc("[00:01.40]Hello\n[00:00.50]World"), 2);

	let processed = session.process(WriteOptions::new()).unwrap();
	assert_eq!(processed.file_name, "Song_tagged.mp3");
	assert!(processed.bytes.ends_with(AUDIO));

	let reloaded = lyrictag::decode(&processed.bytes, ParseOptions::new());
	let lines = reloaded
		.metadata
		.lyrics
		.active()
		.synced
		.iter()
		.map(|l| (l.text.as_str(), l.timestamp_ms))
		.collect::<Vec<_>>();
	assert_eq!(lines, [("World", 500), ("Hello", 1400)]);
	assert_eq!(&reloaded.metadata, session.metadata().unwrap());
}

#[test_log::test]
fn newer_load_wins() {
	let mut session = EditorSession::new();

	let slow = session.begin_load();
	let fast = session.begin_load();

	let mut metadata = Metadata::default();
	metadata.fields.set(TagField::Title, "Fast");
	let (_, fast_file) = round_trip(&metadata);

	assert_eq!(
		session.complete_load(fast, "fast.mp3", fast_file),
		LoadOutcome::Installed
	);
	assert_eq!(
		session.complete_load(slow, "slow.mp3", lyrictag::decode(AUDIO, ParseOptions::new())),
		LoadOutcome::Stale
	);

	assert_eq!(session.file_name(), Some("fast.mp3"));
	assert_eq!(
		session.metadata().unwrap().fields.get(TagField::Title),
		Some("Fast")
	);
}

#[test_log::test]
fn corrupt_file_loads_empty() {
	// Extended header with an impossible size
	let mut bytes = b"ID3\x03\x00\x40\x00\x00\x00\x0B".to_vec();
	bytes.extend(b"\x00\x00\x00\x07\x00\x00\x00\x00\x00\x00\x00");
	bytes.extend(AUDIO);

	let mut session = EditorSession::new();
	let token = session.begin_load();
	let decoded = lyrictag::decode(&bytes, ParseOptions::new());
	session.complete_load(token, "corrupt.mp3", decoded);

	assert!(session.note().is_some());
	assert_eq!(session.metadata(), Some(&Metadata::default()));

	let processed = session.process(WriteOptions::new()).unwrap();
	assert_eq!(processed.file_name, "corrupt_tagged.mp3");
	assert_eq!(processed.bytes.len(), 10 + AUDIO.len());
}

#[test_log::test]
fn nothing_loaded() {
	let mut session = EditorSession::new();
	assert_eq!(session.import_lrc("[00:00.00]Ignored"), 0);

	let err = session.process(WriteOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoFileLoaded));
}
