// Copyright 2024-2025 Irreducible Inc.

use cayley_ring::{Error, FieldDescriptor};

/// The ring of integers, backed by `i64`.
///
/// Only the units `1` and `-1` have inverses. Arithmetic is exact as long as the values stay
/// well inside the `i64` range, which makes this ring the reference for exact algebraic laws.
#[derive(Debug, Default, Clone, Copy)]
pub struct Integers;

impl FieldDescriptor for Integers {
	type Elem = i64;

	fn zero(&self) -> i64 {
		0
	}

	fn one(&self) -> i64 {
		1
	}

	fn contains(&self, _a: &i64) -> bool {
		true
	}

	fn equality(&self, a: &i64, b: &i64) -> bool {
		a == b
	}

	fn addition(&self, a: &i64, b: &i64) -> i64 {
		a + b
	}

	fn negation(&self, a: &i64) -> i64 {
		-a
	}

	fn multiplication(&self, a: &i64, b: &i64) -> i64 {
		a * b
	}

	fn inversion(&self, a: &i64) -> Result<i64, Error> {
		match a {
			1 | -1 => Ok(*a),
			_ => Err(Error::NotInvertible),
		}
	}
}
