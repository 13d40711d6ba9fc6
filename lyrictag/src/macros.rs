macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(LyricTagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(LyricTagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(LyricTagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::LyricTagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::LyricTagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for return Err(Id3v2Error::new(Id3v2ErrorKind::Foo).into())
//
// Usage:
// - id3v2_err!(Variant)        -> return Err(Id3v2Error::new(Id3v2ErrorKind::Variant).into())
// - id3v2_err!(Variant(value)) -> return Err(Id3v2Error::new(Id3v2ErrorKind::Variant(value)).into())
macro_rules! id3v2_err {
	($variant:ident) => {
		return Err(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant,
		)
		.into())
	};
	($variant:ident($($value:expr),+)) => {
		return Err(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant($($value),+),
		)
		.into())
	};
}

pub(crate) use {err, id3v2_err, try_vec};
