use lyrictag::config::{ParseOptions, WriteOptions};
use lyrictag::file::{AudioPayload, DecodedFile};
use lyrictag::model::Metadata;

/// A few MPEG frame headers standing in for real audio
pub const AUDIO: &[u8] = b"\xFF\xFB\x90\x64\x00\x00\x00\x00\xFF\xFB\x90\x64\x00\x00\x00\x00";

/// Build an ID3v2 tag with the given version, flags, and body
pub fn id3v2(major: u8, flags: u8, body: &[u8]) -> Vec<u8> {
	let size = body.len() as u32;
	assert!(size < 1 << 28);

	let mut tag = vec![b'I', b'D', b'3', major, 0, flags];
	tag.extend([
		((size >> 21) & 0x7F) as u8,
		((size >> 14) & 0x7F) as u8,
		((size >> 7) & 0x7F) as u8,
		(size & 0x7F) as u8,
	]);
	tag.extend(body);
	tag
}

/// Build an ID3v2.3 frame
pub fn frame(id: &[u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend((content.len() as u32).to_be_bytes());
	frame.extend(flags.to_be_bytes());
	frame.extend(content);
	frame
}

/// Encode `metadata` in front of [`AUDIO`], and decode it again
pub fn round_trip(metadata: &Metadata) -> (Vec<u8>, DecodedFile) {
	let audio = AudioPayload::from(AUDIO.to_vec());
	let bytes = lyrictag::encode(metadata, &audio, WriteOptions::new()).unwrap();
	let decoded = lyrictag::decode(&bytes, ParseOptions::new());

	assert!(decoded.note.is_none(), "{:?}", decoded.note);
	assert_eq!(decoded.audio, audio);

	(bytes, decoded)
}
