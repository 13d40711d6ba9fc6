//! LRC lyric parsing and formatting
//!
//! Only the basic timestamp form is understood: each line starts with `[MM:SS.CC]`
//! (or `[MM:SS:CC]`), where every field is exactly two digits. Anything else, including
//! ID tags such as `[ar:Artist]` and lines with multiple timestamps, is ignored.
//!
//! # Examples
//!
//! ```rust
//! use lyrictag::lrc::{format_lrc_timestamp, parse_lrc};
//!
//! let lines = parse_lrc("[00:01.40]Hello\n[00:00.50]World");
//! assert_eq!(lines[0].text, "World");
//! assert_eq!(lines[0].timestamp_ms, 500);
//! assert_eq!(format_lrc_timestamp(lines[1].timestamp_ms), "[00:01.40]");
//! ```

use crate::model::SyncedLine;

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\[([0-9]{2}):([0-9]{2})[.:]([0-9]{2})\](.*)$")
		.expect("LRC timestamp pattern should compile")
});

/// Parse LRC text into synchronized lines
///
/// Lines without a leading timestamp are skipped. The text following the timestamp is
/// trimmed, and may be empty.
///
/// The output is sorted by timestamp. Lines sharing a timestamp keep their relative order.
pub fn parse_lrc(text: &str) -> Vec<SyncedLine> {
	let mut lines = Vec::new();
	for line in text.lines() {
		let Some(captures) = TIMESTAMP_LINE.captures(line) else {
			if !line.trim().is_empty() {
				log::trace!("Skipping LRC line without a timestamp: {line:?}");
			}
			continue;
		};

		// Each field is exactly two ASCII digits, these can't fail
		let field = |i: usize| -> u32 { captures[i].parse().unwrap_or_default() };

		let timestamp_ms = field(1) * 60_000 + field(2) * 1000 + field(3) * 10;
		lines.push(SyncedLine::new(captures[4].trim(), timestamp_ms));
	}

	// `sort_by_key` is stable
	lines.sort_by_key(|line| line.timestamp_ms);
	lines
}

/// Format a millisecond timestamp as `[MM:SS.CC]`
///
/// Anything below a hundredth of a second is truncated. Minutes past 99 are printed in full.
///
/// # Examples
///
/// ```rust
/// use lyrictag::lrc::format_lrc_timestamp;
///
/// assert_eq!(format_lrc_timestamp(83_456), "[01:23.45]");
/// assert_eq!(format_lrc_timestamp(6_000_000), "[100:00.00]");
/// ```
pub fn format_lrc_timestamp(ms: u32) -> String {
	let total_seconds = ms / 1000;
	let minutes = total_seconds / 60;
	let seconds = total_seconds % 60;
	let centis = (ms % 1000) / 10;

	format!("[{minutes:02}:{seconds:02}.{centis:02}]")
}

/// Render synchronized lines back into LRC text
///
/// Lines are written in the order given, one per line.
pub fn to_lrc(lines: &[SyncedLine]) -> String {
	let mut out = String::new();
	for line in lines {
		let _ = writeln!(out, "{}{}", format_lrc_timestamp(line.timestamp_ms), line.text);
	}

	out
}
