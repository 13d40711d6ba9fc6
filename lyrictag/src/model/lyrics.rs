use crate::lang::Language;

use std::borrow::Cow;

/// A single line of synchronized lyrics
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyncedLine {
	/// The lyric text, possibly empty
	pub text: String,
	/// When the line starts, in milliseconds
	pub timestamp_ms: u32,
}

impl SyncedLine {
	/// Create a new `SyncedLine`
	pub fn new(text: impl Into<String>, timestamp_ms: u32) -> Self {
		Self {
			text: text.into(),
			timestamp_ms,
		}
	}
}

/// Lyrics in a single language
///
/// Each group is written as a `SYLT`/`USLT` frame pair sharing the group's language
/// and description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LyricGroup {
	/// The lyrics' language
	pub language: Language,
	/// Tells apart groups in the same language
	pub description: String,
	/// Timestamped lines, in the order they are written
	pub synced: Vec<SyncedLine>,
	/// Plain lyrics
	///
	/// When blank, the text is derived from `synced`, see [`LyricGroup::auto_unsynced_text`].
	pub unsynced: String,
}

impl Default for LyricGroup {
	fn default() -> Self {
		Self {
			language: Language::ENGLISH,
			description: String::new(),
			synced: Vec::new(),
			unsynced: String::new(),
		}
	}
}

impl LyricGroup {
	/// Create an empty group
	pub fn new(language: Language, description: impl Into<String>) -> Self {
		Self {
			language,
			description: description.into(),
			..Self::default()
		}
	}

	/// The plain lyrics that will be written for this group
	///
	/// This is `unsynced` if it has any non-whitespace content, otherwise the synchronized
	/// lines joined by newlines.
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::model::{LyricGroup, SyncedLine};
	///
	/// let mut group = LyricGroup::default();
	/// group.push_line(SyncedLine::new("Hello", 0));
	/// group.push_line(SyncedLine::new("World", 500));
	/// assert_eq!(group.auto_unsynced_text(), "Hello\nWorld");
	///
	/// group.unsynced = String::from("Custom");
	/// assert_eq!(group.auto_unsynced_text(), "Custom");
	/// ```
	pub fn auto_unsynced_text(&self) -> Cow<'_, str> {
		if !self.unsynced.trim().is_empty() {
			return Cow::Borrowed(&self.unsynced);
		}

		Cow::Owned(Self::join_lines(&self.synced))
	}

	pub(crate) fn join_lines(lines: &[SyncedLine]) -> String {
		lines
			.iter()
			.map(|line| line.text.as_str())
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Append a line
	///
	/// Lines are not re-sorted, see [`LyricGroup::sort_lines`].
	pub fn push_line(&mut self, line: SyncedLine) {
		self.synced.push(line);
	}

	/// Remove the line at `index`
	///
	/// Returns `None` and does nothing if `index` is out of range.
	pub fn remove_line(&mut self, index: usize) -> Option<SyncedLine> {
		if index >= self.synced.len() {
			return None;
		}

		Some(self.synced.remove(index))
	}

	/// Sort the lines by timestamp
	///
	/// Lines sharing a timestamp keep their relative order.
	pub fn sort_lines(&mut self) {
		self.synced.sort_by_key(|line| line.timestamp_ms);
	}
}

/// The lyric groups of a file
///
/// There is always at least one group, and exactly one of them is active.
///
/// The active group is editor state, it is not stored in a file. Two `LyricGroups`
/// are equal when their groups are, regardless of which is selected.
#[derive(Clone, Debug)]
pub struct LyricGroups {
	groups: Vec<LyricGroup>,
	active: usize,
}

impl PartialEq for LyricGroups {
	fn eq(&self, other: &Self) -> bool {
		self.groups == other.groups
	}
}

impl Eq for LyricGroups {}

impl Default for LyricGroups {
	fn default() -> Self {
		Self {
			groups: vec![LyricGroup::default()],
			active: 0,
		}
	}
}

impl<'a> IntoIterator for &'a LyricGroups {
	type Item = &'a LyricGroup;
	type IntoIter = std::slice::Iter<'a, LyricGroup>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.iter()
	}
}

impl From<Vec<LyricGroup>> for LyricGroups {
	/// An empty `Vec` results in a single default group
	fn from(groups: Vec<LyricGroup>) -> Self {
		if groups.is_empty() {
			return Self::default();
		}

		Self { groups, active: 0 }
	}
}

impl LyricGroups {
	/// The number of groups, never 0
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Iterate over the groups in order
	pub fn iter(&self) -> std::slice::Iter<'_, LyricGroup> {
		self.groups.iter()
	}

	/// Get the group at `index`
	pub fn get(&self, index: usize) -> Option<&LyricGroup> {
		self.groups.get(index)
	}

	/// Get the group at `index` mutably
	pub fn get_mut(&mut self, index: usize) -> Option<&mut LyricGroup> {
		self.groups.get_mut(index)
	}

	/// The index of the active group
	pub fn active_index(&self) -> usize {
		self.active
	}

	/// The active group
	pub fn active(&self) -> &LyricGroup {
		&self.groups[self.active]
	}

	/// The active group, mutably
	pub fn active_mut(&mut self) -> &mut LyricGroup {
		&mut self.groups[self.active]
	}

	/// Append a new English group with no description and select it
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::model::LyricGroups;
	///
	/// let mut groups = LyricGroups::default();
	/// groups.add_group();
	///
	/// assert_eq!(groups.len(), 2);
	/// assert_eq!(groups.active_index(), 1);
	/// ```
	pub fn add_group(&mut self) -> &mut LyricGroup {
		self.groups.push(LyricGroup::default());
		self.active = self.groups.len() - 1;
		self.active_mut()
	}

	/// Remove the group at `index`
	///
	/// This does nothing if `index` is out of range, or if it is the last remaining group.
	/// Otherwise, the group before the removed one becomes active.
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::model::LyricGroups;
	///
	/// let mut groups = LyricGroups::default();
	/// assert!(groups.delete_group(0).is_none());
	/// assert_eq!(groups.len(), 1);
	/// ```
	pub fn delete_group(&mut self, index: usize) -> Option<LyricGroup> {
		if self.groups.len() <= 1 || index >= self.groups.len() {
			return None;
		}

		let removed = self.groups.remove(index);
		self.set_active(index.saturating_sub(1));
		Some(removed)
	}

	/// Select the active group
	///
	/// `index` is clamped to the available groups.
	pub fn set_active(&mut self, index: usize) {
		self.active = index.min(self.groups.len() - 1);
	}
}
