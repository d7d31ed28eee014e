// Copyright 2024-2025 Irreducible Inc.

use cayley_utils::ensure;

use crate::{variadic::fold_left, Error, FieldDescriptor};

/// The full operation family of a field or ring, derived from its [`FieldDescriptor`].
///
/// Binary arithmetic operations take two or more operands and fold them from the left, so
/// `ring.subtraction([&a, &b, &c])` is `(a - b) - c`. The binary forms ([`Ring::add`],
/// [`Ring::sub`], [`Ring::mul`], [`Ring::div`]) are provided for callers that always have
/// exactly two operands.
///
/// `Ring` itself implements [`FieldDescriptor`], with zero-checked inversion, so a wrapped
/// structure can be handed to anything that consumes a descriptor.
#[derive(Debug, Clone, Default)]
pub struct Ring<D> {
	descriptor: D,
}

impl<D: FieldDescriptor> Ring<D> {
	pub const fn new(descriptor: D) -> Self {
		Self { descriptor }
	}

	pub const fn descriptor(&self) -> &D {
		&self.descriptor
	}

	pub fn zero(&self) -> D::Elem {
		self.descriptor.zero()
	}

	pub fn one(&self) -> D::Elem {
		self.descriptor.one()
	}

	pub fn is_zero(&self, a: &D::Elem) -> bool {
		self.equality(a, &self.zero())
	}

	pub fn equality(&self, a: &D::Elem, b: &D::Elem) -> bool {
		self.descriptor.equality(a, b)
	}

	pub fn disequality(&self, a: &D::Elem, b: &D::Elem) -> bool {
		!self.equality(a, b)
	}

	/// Returns true iff all operands are pairwise equal.
	///
	/// Equality is only assumed to be an equivalence relation, so consecutive operands are
	/// compared.
	pub fn all_equal<'a>(
		&self,
		operands: impl IntoIterator<Item = &'a D::Elem>,
	) -> Result<bool, Error>
	where
		D::Elem: 'a,
	{
		let mut all_equal = true;
		fold_left(operands, |prev, next| {
			all_equal &= self.equality(prev, next);
			Ok(next.clone())
		})?;
		Ok(all_equal)
	}

	pub fn contains(&self, a: &D::Elem) -> bool {
		self.descriptor.contains(a)
	}

	pub fn not_contains(&self, a: &D::Elem) -> bool {
		!self.contains(a)
	}

	pub fn add(&self, a: &D::Elem, b: &D::Elem) -> D::Elem {
		self.descriptor.addition(a, b)
	}

	pub fn sub(&self, a: &D::Elem, b: &D::Elem) -> D::Elem {
		self.add(a, &self.negation(b))
	}

	pub fn mul(&self, a: &D::Elem, b: &D::Elem) -> D::Elem {
		self.descriptor.multiplication(a, b)
	}

	pub fn div(&self, a: &D::Elem, b: &D::Elem) -> Result<D::Elem, Error> {
		Ok(self.mul(a, &self.inversion(b)?))
	}

	pub fn addition<'a>(&self, operands: impl IntoIterator<Item = &'a D::Elem>) -> Result<D::Elem, Error>
	where
		D::Elem: 'a,
	{
		fold_left(operands, |a, b| Ok(self.add(a, b)))
	}

	pub fn subtraction<'a>(
		&self,
		operands: impl IntoIterator<Item = &'a D::Elem>,
	) -> Result<D::Elem, Error>
	where
		D::Elem: 'a,
	{
		fold_left(operands, |a, b| Ok(self.sub(a, b)))
	}

	pub fn negation(&self, a: &D::Elem) -> D::Elem {
		self.descriptor.negation(a)
	}

	pub fn multiplication<'a>(
		&self,
		operands: impl IntoIterator<Item = &'a D::Elem>,
	) -> Result<D::Elem, Error>
	where
		D::Elem: 'a,
	{
		fold_left(operands, |a, b| Ok(self.mul(a, b)))
	}

	pub fn division<'a>(&self, operands: impl IntoIterator<Item = &'a D::Elem>) -> Result<D::Elem, Error>
	where
		D::Elem: 'a,
	{
		fold_left(operands, |a, b| self.div(a, b))
	}

	/// Computes the multiplicative inverse, failing with [`Error::DivisionByZero`] at zero.
	pub fn inversion(&self, a: &D::Elem) -> Result<D::Elem, Error> {
		ensure!(!self.is_zero(a), Error::DivisionByZero);
		self.descriptor.inversion(a)
	}
}

impl<D: FieldDescriptor> FieldDescriptor for Ring<D> {
	type Elem = D::Elem;

	fn zero(&self) -> Self::Elem {
		Ring::zero(self)
	}

	fn one(&self) -> Self::Elem {
		Ring::one(self)
	}

	fn contains(&self, a: &Self::Elem) -> bool {
		Ring::contains(self, a)
	}

	fn equality(&self, a: &Self::Elem, b: &Self::Elem) -> bool {
		Ring::equality(self, a, b)
	}

	fn addition(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		self.add(a, b)
	}

	fn negation(&self, a: &Self::Elem) -> Self::Elem {
		Ring::negation(self, a)
	}

	fn multiplication(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
		self.mul(a, b)
	}

	fn inversion(&self, a: &Self::Elem) -> Result<Self::Elem, Error> {
		Ring::inversion(self, a)
	}
}
