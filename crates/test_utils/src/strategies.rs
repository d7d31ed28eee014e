// Copyright 2024-2025 Irreducible Inc.

//! Proptest strategies producing elements of a given dimension.

use proptest::{collection::vec, prelude::*};

/// Elements over [`crate::Integers`] with small components, so that products at moderate
/// depths cannot overflow.
pub fn integer_elements(dim: usize) -> impl Strategy<Value = Vec<i64>> {
	vec(-50i64..=50, dim)
}

/// Elements over [`crate::Reals`] with components of moderate magnitude.
pub fn real_elements(dim: usize) -> impl Strategy<Value = Vec<f64>> {
	vec(-100.0f64..100.0, dim)
}

/// Elements over [`crate::PrimeField`].
pub fn prime_field_elements<const P: u64>(dim: usize) -> impl Strategy<Value = Vec<u64>> {
	vec(0..P, dim)
}
