mod attached_picture_frame;
mod binary_frame;
mod language_frame;
mod sync_text;
mod text_information_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use binary_frame::BinaryFrame;
pub use language_frame::{CommentFrame, UnsynchronizedTextFrame};
pub use sync_text::{SyncTextContentType, SynchronizedTextFrame, TimestampFormat};
pub use text_information_frame::TextInformationFrame;
