// Copyright 2024-2025 Irreducible Inc.

use cayley_utils::{bail, checked_arithmetics::checked_pow_2};

use crate::Error;

/// Number of Cayley-Dickson iterations, the dimension of the resulting algebra is `2^depth`.
///
/// A `Depth` always has a dimension that fits into `usize`. Counts coming from untyped sources
/// can be checked with the `TryFrom<i64>` and `TryFrom<f64>` conversions, which reject negative
/// and non-integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(usize);

impl Depth {
	/// The largest supported depth.
	pub const MAX: usize = usize::BITS as usize - 1;

	pub fn new(depth: usize) -> Result<Self, Error> {
		match checked_pow_2(depth) {
			Some(_) => Ok(Self(depth)),
			None => Err(Error::DepthTooLarge(depth)),
		}
	}

	pub const fn get(self) -> usize {
		self.0
	}

	/// Number of base field components in an element at this depth.
	pub const fn dim(self) -> usize {
		1 << self.0
	}
}

impl TryFrom<i64> for Depth {
	type Error = Error;

	fn try_from(value: i64) -> Result<Self, Error> {
		let Ok(depth) = usize::try_from(value) else {
			bail!(Error::NegativeDepth(value));
		};
		Self::new(depth)
	}
}

impl TryFrom<f64> for Depth {
	type Error = Error;

	fn try_from(value: f64) -> Result<Self, Error> {
		if !value.is_finite() || value.fract() != 0.0 {
			bail!(Error::FractionalDepth(value));
		}
		if value < 0.0 {
			bail!(Error::NegativeDepth(value as i64));
		}
		if value > Self::MAX as f64 {
			bail!(Error::DepthTooLarge(value as usize));
		}
		Self::new(value as usize)
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_dimensions() {
		assert_eq!(Depth::new(0).unwrap().dim(), 1);
		assert_eq!(Depth::new(3).unwrap().dim(), 8);
		assert_eq!(Depth::new(Depth::MAX).unwrap().dim(), 1 << Depth::MAX);
	}

	#[test]
	fn test_too_large() {
		assert_eq!(Depth::new(Depth::MAX + 1), Err(Error::DepthTooLarge(Depth::MAX + 1)));
		assert_matches!(Depth::try_from(1e30), Err(Error::DepthTooLarge(_)));
	}

	#[test]
	fn test_from_signed() {
		assert_eq!(Depth::try_from(4i64).map(Depth::get), Ok(4));
		assert_eq!(Depth::try_from(-1i64), Err(Error::NegativeDepth(-1)));
	}

	#[test]
	fn test_from_float() {
		assert_eq!(Depth::try_from(3.0).map(Depth::get), Ok(3));
		assert_eq!(Depth::try_from(-0.0).map(Depth::get), Ok(0));
		assert_eq!(Depth::try_from(1.5), Err(Error::FractionalDepth(1.5)));
		assert_eq!(Depth::try_from(-2.0), Err(Error::NegativeDepth(-2)));
		assert_matches!(Depth::try_from(f64::NAN), Err(Error::FractionalDepth(_)));
		assert_matches!(Depth::try_from(f64::INFINITY), Err(Error::FractionalDepth(_)));
	}
}
