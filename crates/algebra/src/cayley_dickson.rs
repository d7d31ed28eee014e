// Copyright 2024-2025 Irreducible Inc.

use std::iter;

use cayley_ring::{FieldDescriptor, Ring};

use crate::{
	construction::{build_conjugation, build_multiplication, invert, norm},
	lift::{lift_binary, lift_unary},
	tracing::trace_multiplication,
	Depth,
};

/// The primitive operations of the algebra obtained by applying the Cayley-Dickson
/// construction `depth` times to a base field.
///
/// Elements are vectors of exactly `2^depth` base field elements. At depth 0 the base
/// operations are passed through unchanged on one-element vectors.
#[derive(Debug, Clone)]
pub struct CayleyDickson<F> {
	field: Ring<F>,
	depth: Depth,
}

impl<F: FieldDescriptor> CayleyDickson<F> {
	pub fn new(field: F, depth: Depth) -> Self {
		Self {
			field: Ring::new(field),
			depth,
		}
	}

	/// The base field, with its derived operations.
	pub const fn field(&self) -> &Ring<F> {
		&self.field
	}

	pub const fn depth(&self) -> Depth {
		self.depth
	}

	pub const fn dim(&self) -> usize {
		self.depth.dim()
	}

	pub fn conjugation(&self, a: &[F::Elem]) -> Vec<F::Elem> {
		build_conjugation(&self.field, self.depth.get())(a)
	}

	pub fn norm(&self, a: &[F::Elem]) -> F::Elem {
		norm(&self.field, self.depth.get(), a)
	}
}

impl<F: FieldDescriptor> FieldDescriptor for CayleyDickson<F> {
	type Elem = Vec<F::Elem>;

	fn zero(&self) -> Self::Elem {
		vec![self.field.zero(); self.dim()]
	}

	fn one(&self) -> Self::Elem {
		iter::once(self.field.one())
			.chain(iter::repeat(self.field.zero()).take(self.dim() - 1))
			.collect()
	}

	fn contains(&self, a: &Self::Elem) -> bool {
		a.len() == self.dim() && a.iter().all(|x| self.field.contains(x))
	}

	fn equality(&self, a: &Self::Elem, b: &Self::Elem) -> bool {
		a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.field.equality(x, y))
	}

	fn addition(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		lift_binary(|x, y| self.field.add(x, y), self.dim())(a, b)
	}

	fn negation(&self, a: &Self::Elem) -> Self::Elem {
		lift_unary(|x| self.field.negation(x), self.dim())(a)
	}

	fn multiplication(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		trace_multiplication!(F, self.depth.get(), self.dim());

		build_multiplication(&self.field, self.depth.get())(a, b)
	}

	fn inversion(&self, a: &Self::Elem) -> Result<Self::Elem, cayley_ring::Error> {
		match self.depth.get() {
			0 => Ok(vec![self.field.inversion(&a[0])?]),
			depth => invert(&self.field, depth, a),
		}
	}
}
