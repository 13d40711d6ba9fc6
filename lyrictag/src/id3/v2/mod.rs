//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! Tags of any ID3v2 version are recognized (so they can be replaced), but only ID3v2.3
//! frames are read, and only ID3v2.3 is written.
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
pub(crate) mod tag;
pub mod util;
pub(crate) mod write;

// Exports

pub use header::{Id3v2TagFlags, Id3v2Version};

pub use tag::Id3v2Tag;

pub use items::*;

pub use frame::Frame;
pub use frame::header::{FrameFlags, FrameHeader, FrameId};
