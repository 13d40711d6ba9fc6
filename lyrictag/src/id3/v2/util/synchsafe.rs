//! Utilities for working with unsynchronized ID3v2 content
//!
//! The tag header stores its size as a "synchsafe" integer, 7 bits per byte, so that no
//! byte of the size can be mistaken for the start of an MPEG frame sync (`0xFF 0xE0`). Tags
//! may additionally have their whole body unsynchronized, where every `0xFF` byte that
//! could start a false sync is followed by an inserted `0x00`.

use crate::error::Result;

/// Undo tag-wide unsynchronisation
///
/// Every `0x00` that directly follows a `0xFF` is dropped.
///
/// # Examples
///
/// ```rust
/// use lyrictag::id3::v2::util::synchsafe::resynchronize;
///
/// // The content has two `0xFF 0x00` pairs, which will be collapsed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// assert_eq!(resynchronize(&content), [0xFF, 0x1A, 0xFF, 0x15]);
/// ```
pub fn resynchronize(content: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(content.len());

	let mut encountered_ff = false;
	for &byte in content {
		if encountered_ff {
			encountered_ff = false;

			// Only skip the byte if this is valid unsynchronization
			if byte == 0 {
				continue;
			}
		}

		if byte == 0xFF {
			encountered_ff = true;
		}

		out.push(byte);
	}

	out
}

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use lyrictag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> lyrictag::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Now, our re-unsynchronized number should match our original
	/// assert_eq!(synch_number.unsynch(), unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;

	/// Whether every byte of `self` has its most significant bit clear
	fn is_synchsafe(self) -> bool;
}

macro_rules! impl_synchsafe {
	(
		$ty:ty,
		synch($n:ident) $body:block;
		unsynch($u:ident) $unsynch_body:block;
		mask: $mask:literal
	) => {
		#[allow(unused_parens)]
		impl SynchsafeInteger for $ty {
			fn synch(self) -> Result<Self> {
				const MAXIMUM_INTEGER: $ty = {
					let num_bytes = core::mem::size_of::<$ty>();
					// 7 bits are available per byte, shave off 1 bit per byte
					<$ty>::MAX >> num_bytes
				};

				if self > MAXIMUM_INTEGER {
					crate::macros::err!(TooMuchData);
				}

				let $n = self;
				Ok($body)
			}

			fn unsynch(self) -> Self {
				let $u = self;
				$unsynch_body
			}

			fn is_synchsafe(self) -> bool {
				self & $mask == 0
			}
		}
	};
}

impl_synchsafe! {
	u16,
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1)
	};
	unsynch(u) {
		((u & 0x7F00) >> 1) | (u & 0x7F)
	};
	mask: 0x8080
}

impl_synchsafe! {
	u32,
	synch(n) {
		(n & 0x7F) |
		((n & (0x7F << 7)) << 1) |
		((n & (0x7F << 14)) << 2) |
		((n & (0x7F << 21)) << 3)
	};
	unsynch(u) {
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	};
	mask: 0x8080_8080
}

#[cfg(test)]
mod tests {
	use crate::id3::v2::util::synchsafe::{SynchsafeInteger, resynchronize};

	const UNSYNCHRONIZED_CONTENT: &[u8] =
		&[0xFF, 0x00, 0x00, 0xFF, 0x12, 0xB0, 0x05, 0xFF, 0x00, 0x00];
	const EXPECTED: &[u8] = &[0xFF, 0x00, 0xFF, 0x12, 0xB0, 0x05, 0xFF, 0x00];

	#[test_log::test]
	fn resynchronized_content() {
		assert_eq!(resynchronize(UNSYNCHRONIZED_CONTENT), EXPECTED);
	}

	#[test_log::test]
	fn resynchronize_should_not_replace_unrelated() {
		const ORIGINAL_CONTENT: &[u8] = &[0xFF, 0x1A, 0xFF, 0xC0, 0x10, 0x01];

		assert_eq!(resynchronize(ORIGINAL_CONTENT), ORIGINAL_CONTENT);
	}

	#[test_log::test]
	fn synch_rejects_oversized() {
		assert!(0x1000_0000_u32.synch().is_err());
	}

	macro_rules! synchsafe_integer_tests {
		(
			$($int:ty => {
				synch: $original:literal, $new:literal;
				unsynch: $original_unsync:literal, $new_unsynch:literal;
			});+
		) => {
			$(
				paste::paste! {
					#[test_log::test]
					fn [<$int _synch>]() {
						assert_eq!($original.synch().unwrap(), $new);
						assert!($new.is_synchsafe());
					}

					#[test_log::test]
					fn [<$int _unsynch>]() {
						assert_eq!($original_unsync.unsynch(), $new_unsynch);
					}
				}
			)+
		};
	}

	synchsafe_integer_tests! {
		u16 => {
			synch:   0x3FFF_u16, 0x7F7F_u16;
			unsynch: 0x7F7F_u16, 0x3FFF_u16;
		};
		u32 => {
			synch:   0xFFF_FFFF_u32, 0x7F7F_7F7F_u32;
			unsynch: 0x7F7F_7F7F_u32, 0xFFF_FFFF_u32;
		}
	}
}
