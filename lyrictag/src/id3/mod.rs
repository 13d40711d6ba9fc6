//! ID3 specific items
//!
//! Only ID3v2 tags at the start of a file are handled. Anything after the tag, including
//! any trailing ID3v1 tag, is treated as audio and left untouched.

pub mod v2;

use v2::header::Id3v2Header;

pub(crate) struct ID3FindResults<'a> {
	pub(crate) header: Option<Id3v2Header>,
	/// The tag body, between the header and the footer
	pub(crate) content: &'a [u8],
	/// Everything after the tag
	pub(crate) audio: &'a [u8],
}

/// Look for an ID3v2 tag at the start of `data`
///
/// A tag is only recognized if its header is valid and the whole tag fits within `data`.
/// Otherwise, all of `data` is considered audio.
pub(crate) fn find_id3v2(data: &[u8]) -> ID3FindResults<'_> {
	log::debug!("Searching for an ID3v2 tag");

	let not_found = ID3FindResults {
		header: None,
		content: &[],
		audio: data,
	};

	let header = match Id3v2Header::parse(&mut &data[..]) {
		Ok(header) => header,
		Err(err) => {
			log::trace!("No ID3v2 tag found: {err}");
			return not_found;
		},
	};

	let Ok(full_size) = usize::try_from(header.full_tag_size()) else {
		return not_found;
	};

	if full_size > data.len() {
		log::warn!(
			"ID3v2 tag claims {} bytes, but only {} are available, treating it as audio",
			full_size,
			data.len()
		);
		return not_found;
	}

	log::debug!("Found an ID3v2 tag of {full_size} bytes");

	let content_end = 10 + header.size as usize;
	ID3FindResults {
		header: Some(header),
		content: &data[10..content_end],
		audio: &data[full_size..],
	}
}

#[cfg(test)]
mod tests {
	use super::find_id3v2;

	#[test_log::test]
	fn no_tag() {
		let data = b"\xFF\xFB\x90\x00audio";

		let results = find_id3v2(data);
		assert!(results.header.is_none());
		assert_eq!(results.audio, data);
	}

	#[test_log::test]
	fn strips_tag() {
		let data = b"ID3\x03\x00\x00\x00\x00\x00\x02\x00\x00\xFF\xFB";

		let results = find_id3v2(data);
		assert!(results.header.is_some());
		assert_eq!(results.content, [0, 0]);
		assert_eq!(results.audio, [0xFF, 0xFB]);
	}

	#[test_log::test]
	fn strips_v24_footer() {
		let mut data = b"ID3\x04\x00\x10\x00\x00\x00\x01\x00".to_vec();
		data.extend(b"3DI\x04\x00\x10\x00\x00\x00\x01");
		data.extend(b"audio");

		let results = find_id3v2(&data);
		assert_eq!(results.content, [0]);
		assert_eq!(results.audio, b"audio");
	}

	#[test_log::test]
	fn oversized_tag_is_audio() {
		let data = b"ID3\x03\x00\x00\x00\x00\x01\x00short";

		let results = find_id3v2(data);
		assert!(results.header.is_none());
		assert_eq!(results.audio, data);
	}

	#[test_log::test]
	fn unsupported_versions_are_audio() {
		let data = b"ID3\x05\x00\x00\x00\x00\x00\x00";

		let results = find_id3v2(data);
		assert!(results.header.is_none());
		assert_eq!(results.audio, data);
	}
}
