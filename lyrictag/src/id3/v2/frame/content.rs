use crate::error::Result;
use crate::id3::v2::items::{
	AttachedPictureFrame, CommentFrame, SynchronizedTextFrame, TextInformationFrame,
	UnsynchronizedTextFrame,
};
use crate::id3::v2::{BinaryFrame, Frame, FrameFlags, FrameId};
use crate::macros::err;
use crate::util::text::TextEncoding;

#[rustfmt::skip]
pub(super) fn parse_content(
	content: &[u8],
	id: FrameId,
	flags: FrameFlags,
) -> Result<Option<Frame>> {
	log::trace!("Parsing frame content for ID: {}", id);

	let reader = &mut &*content;
	Ok(match id.as_str() {
		"APIC" => Some(Frame::Picture(AttachedPictureFrame::parse(reader, flags)?)),
		"COMM" => CommentFrame::parse(reader, flags)?.map(Frame::Comment),
		"USLT" => UnsynchronizedTextFrame::parse(reader, flags)?.map(Frame::UnsynchronizedText),
		"SYLT" => Some(Frame::SynchronizedText(SynchronizedTextFrame::parse(content, flags)?)),
		// User defined text frames carry a description, so they are left alone
		"TXXX" => Some(Frame::Binary(BinaryFrame::parse(reader, id, flags)?)),
		i if i.starts_with('T') => TextInformationFrame::parse(reader, id, flags)?.map(Frame::Text),
		// Any unknown frames
		_ => Some(Frame::Binary(BinaryFrame::parse(reader, id, flags)?)),
	})
}

pub(in crate::id3::v2) fn verify_encoding(encoding: u8) -> Result<TextEncoding> {
	match TextEncoding::from_u8(encoding) {
		None => err!(TextDecode("Found invalid encoding")),
		Some(e) => Ok(e),
	}
}
