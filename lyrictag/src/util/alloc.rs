use crate::error::Result;
use crate::macros::err;

/// The largest single allocation made while reading a tag
///
/// ID3v2 sizes are 28-bit synchsafe integers, so nothing legitimate exceeds this.
pub(crate) const ALLOCATION_LIMIT: usize = 256 * 1024 * 1024;

/// **DO NOT USE DIRECTLY**
///
/// Creates a `Vec` of the specified length, containing copies of `element`.
///
/// This should be used through [`try_vec!`](crate::macros::try_vec)
pub(crate) fn fallible_vec_from_element<T>(element: T, expected_size: usize) -> Result<Vec<T>>
where
	T: Clone,
{
	if expected_size > ALLOCATION_LIMIT {
		err!(TooMuchData);
	}

	let mut v = Vec::new();
	v.try_reserve_exact(expected_size)?;
	v.resize(expected_size, element);

	Ok(v)
}

#[cfg(test)]
mod tests {
	use super::fallible_vec_from_element;

	#[test_log::test]
	fn vec_fallible_repeat() {
		let u8_vec = fallible_vec_from_element(0u8, 2).unwrap();
		assert_eq!(u8_vec, &[0, 0]);

		let empty = fallible_vec_from_element(0u8, 0).unwrap();
		assert!(empty.is_empty());
	}

	#[test_log::test]
	fn vec_fallible_repeat_over_limit() {
		assert!(fallible_vec_from_element(0u8, super::ALLOCATION_LIMIT + 1).is_err());
	}
}
