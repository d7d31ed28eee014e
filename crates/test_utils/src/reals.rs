// Copyright 2024-2025 Irreducible Inc.

use cayley_ring::{Error, FieldDescriptor};

/// The real numbers approximated by `f64`.
///
/// Only finite values are members, so overflow and division results such as `inf` or `NaN`
/// fail [`FieldDescriptor::contains`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Reals;

impl FieldDescriptor for Reals {
	type Elem = f64;

	fn zero(&self) -> f64 {
		0.0
	}

	fn one(&self) -> f64 {
		1.0
	}

	fn contains(&self, a: &f64) -> bool {
		a.is_finite()
	}

	fn equality(&self, a: &f64, b: &f64) -> bool {
		a == b
	}

	fn addition(&self, a: &f64, b: &f64) -> f64 {
		a + b
	}

	fn negation(&self, a: &f64) -> f64 {
		-a
	}

	fn multiplication(&self, a: &f64, b: &f64) -> f64 {
		a * b
	}

	fn inversion(&self, a: &f64) -> Result<f64, Error> {
		Ok(1.0 / a)
	}
}

/// Component-wise comparison with a relative tolerance.
pub fn approx_eq(a: &[f64], b: &[f64], tolerance: f64) -> bool {
	a.len() == b.len()
		&& a
			.iter()
			.zip(b)
			.all(|(x, y)| (x - y).abs() <= tolerance * x.abs().max(y.abs()).max(1.0))
}
