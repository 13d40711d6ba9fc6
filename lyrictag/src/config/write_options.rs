/// Options to control how lyrictag writes a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) max_picture_size: usize,
}

impl WriteOptions {
	/// Default upper bound for embedded cover art, in bytes (5 MiB)
	pub const DEFAULT_MAX_PICTURE_SIZE: usize = 5 * 1024 * 1024;

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			max_picture_size: Self::DEFAULT_MAX_PICTURE_SIZE,
		}
	}

	/// The largest picture, in bytes, that will be embedded
	///
	/// Cover art above this size is left out of the tag, and a warning is logged.
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::config::WriteOptions;
	///
	/// // Keep the tag small
	/// let write_options = WriteOptions::new().max_picture_size(512 * 1024);
	/// ```
	pub fn max_picture_size(mut self, max_picture_size: usize) -> Self {
		self.max_picture_size = max_picture_size;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	max_picture_size: 5 * 1024 * 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
