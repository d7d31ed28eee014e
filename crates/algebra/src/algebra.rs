// Copyright 2024-2025 Irreducible Inc.

use std::ops::Deref;

use cayley_ring::{FieldDescriptor, Ring};
use cayley_utils::ensure;

use crate::{CayleyDickson, Depth, Error};

/// An algebra produced by [`crate::iterate`].
///
/// `Algebra` dereferences to the [`Ring`] wrapping its [`CayleyDickson`] primitives, which
/// provides the full operation family (subtraction, division, variadic folds, ...). On top of
/// that it exposes [`Algebra::conjugation`] and [`Algebra::norm`], which the ring wrapper does
/// not know about, along with a few conveniences for addressing elements.
///
/// `Algebra` is itself a [`FieldDescriptor`] and can be iterated again.
#[derive(Debug, Clone)]
pub struct Algebra<F> {
	ring: Ring<CayleyDickson<F>>,
}

#[allow(clippy::ptr_arg)]
impl<F: FieldDescriptor> Algebra<F> {
	pub fn new(construction: CayleyDickson<F>) -> Self {
		Self {
			ring: Ring::new(construction),
		}
	}

	fn construction(&self) -> &CayleyDickson<F> {
		self.ring.descriptor()
	}

	pub fn depth(&self) -> Depth {
		self.construction().depth()
	}

	pub fn dim(&self) -> usize {
		self.construction().dim()
	}

	/// The base field this algebra was built from.
	pub fn base_field(&self) -> &Ring<F> {
		self.construction().field()
	}

	/// Negates every component but the first.
	pub fn conjugation(&self, a: &[F::Elem]) -> Vec<F::Elem> {
		self.construction().conjugation(a)
	}

	/// The bilinear norm $a \bar{a}$, a base field element.
	pub fn norm(&self, a: &[F::Elem]) -> F::Elem {
		self.construction().norm(a)
	}

	// The operations below shadow the `FieldDescriptor` methods of the same name, so method
	// calls on an `Algebra` always reach the wrapped ring.

	pub fn zero(&self) -> Vec<F::Elem> {
		self.ring.zero()
	}

	pub fn one(&self) -> Vec<F::Elem> {
		self.ring.one()
	}

	pub fn contains(&self, a: &Vec<F::Elem>) -> bool {
		self.ring.contains(a)
	}

	pub fn equality(&self, a: &Vec<F::Elem>, b: &Vec<F::Elem>) -> bool {
		self.ring.equality(a, b)
	}

	pub fn addition<'a>(
		&self,
		operands: impl IntoIterator<Item = &'a Vec<F::Elem>>,
	) -> Result<Vec<F::Elem>, cayley_ring::Error>
	where
		F::Elem: 'a,
	{
		self.ring.addition(operands)
	}

	pub fn negation(&self, a: &Vec<F::Elem>) -> Vec<F::Elem> {
		self.ring.negation(a)
	}

	pub fn multiplication<'a>(
		&self,
		operands: impl IntoIterator<Item = &'a Vec<F::Elem>>,
	) -> Result<Vec<F::Elem>, cayley_ring::Error>
	where
		F::Elem: 'a,
	{
		self.ring.multiplication(operands)
	}

	pub fn inversion(&self, a: &Vec<F::Elem>) -> Result<Vec<F::Elem>, cayley_ring::Error> {
		self.ring.inversion(a)
	}

	/// Checks that `components` form an element of this algebra.
	pub fn element(&self, components: Vec<F::Elem>) -> Result<Vec<F::Elem>, Error> {
		ensure!(
			components.len() == self.dim(),
			Error::DimensionMismatch {
				expected: self.dim(),
				actual: components.len(),
			}
		);
		if let Some(index) = components
			.iter()
			.position(|x| self.base_field().not_contains(x))
		{
			return Err(Error::NotInField { index });
		}
		Ok(components)
	}

	/// Embeds a base field element as `[value, 0, ..., 0]`.
	pub fn scalar(&self, value: F::Elem) -> Vec<F::Elem> {
		let mut element = self.zero();
		element[0] = value;
		element
	}

	/// The `i`-th unit of the canonical basis; `basis(0)` is the identity.
	pub fn basis(&self, i: usize) -> Result<Vec<F::Elem>, Error> {
		ensure!(
			i < self.dim(),
			Error::IndexOutOfRange {
				index: i,
				max: self.dim(),
			}
		);
		let mut element = self.zero();
		element[i] = self.base_field().one();
		Ok(element)
	}

	/// Builds an element from its leading coordinates, the remaining ones are zero.
	pub fn from_bases(&self, bases: &[F::Elem]) -> Result<Vec<F::Elem>, Error> {
		ensure!(
			bases.len() <= self.dim(),
			Error::DimensionMismatch {
				expected: self.dim(),
				actual: bases.len(),
			}
		);
		let mut element = self.zero();
		element[..bases.len()].clone_from_slice(bases);
		Ok(element)
	}

	pub fn square(&self, a: &Vec<F::Elem>) -> Vec<F::Elem> {
		self.ring.mul(a, a)
	}

	/// Raises `a` to the power `exp` by square-and-multiply.
	///
	/// Cayley-Dickson algebras are power-associative, so the result does not depend on the
	/// bracketing even where multiplication is not associative.
	pub fn pow(&self, a: &Vec<F::Elem>, exp: u64) -> Vec<F::Elem> {
		let mut result = self.one();
		for i in (0..u64::BITS - exp.leading_zeros()).rev() {
			result = self.square(&result);
			if (exp >> i) & 1 == 1 {
				result = self.ring.mul(&result, a);
			}
		}
		result
	}

	/// The commutator $ab - ba$, zero for all pairs iff the algebra is commutative.
	pub fn commutator(&self, a: &Vec<F::Elem>, b: &Vec<F::Elem>) -> Vec<F::Elem> {
		self.ring.sub(&self.ring.mul(a, b), &self.ring.mul(b, a))
	}

	/// The associator $(ab)c - a(bc)$, zero for all triples iff the algebra is associative.
	pub fn associator(
		&self,
		a: &Vec<F::Elem>,
		b: &Vec<F::Elem>,
		c: &Vec<F::Elem>,
	) -> Vec<F::Elem> {
		let left = self.ring.mul(&self.ring.mul(a, b), c);
		let right = self.ring.mul(a, &self.ring.mul(b, c));
		self.ring.sub(&left, &right)
	}
}

impl<F> Deref for Algebra<F> {
	type Target = Ring<CayleyDickson<F>>;

	fn deref(&self) -> &Self::Target {
		&self.ring
	}
}

impl<F: FieldDescriptor> FieldDescriptor for Algebra<F> {
	type Elem = Vec<F::Elem>;

	fn zero(&self) -> Self::Elem {
		self.ring.zero()
	}

	fn one(&self) -> Self::Elem {
		self.ring.one()
	}

	fn contains(&self, a: &Self::Elem) -> bool {
		self.ring.contains(a)
	}

	fn equality(&self, a: &Self::Elem, b: &Self::Elem) -> bool {
		self.ring.equality(a, b)
	}

	fn addition(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		self.ring.add(a, b)
	}

	fn negation(&self, a: &Self::Elem) -> Self::Elem {
		self.ring.negation(a)
	}

	fn multiplication(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		self.ring.mul(a, b)
	}

	fn inversion(&self, a: &Self::Elem) -> Result<Self::Elem, cayley_ring::Error> {
		self.ring.inversion(a)
	}
}
