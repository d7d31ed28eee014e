// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use auto_impl::auto_impl;

use crate::Error;

/// The primitive operations of a field or ring.
///
/// Implementations must be pure and closed: every operation returns a fresh value and every
/// output of an operation satisfies [`FieldDescriptor::contains`] when its inputs do.
#[auto_impl(&, Box, Arc)]
pub trait FieldDescriptor: Send + Sync {
	/// Element type of the structure.
	type Elem: Clone + Debug + Send + Sync;

	/// The additive identity.
	fn zero(&self) -> Self::Elem;

	/// The multiplicative identity.
	fn one(&self) -> Self::Elem;

	/// Returns true iff `a` is an element of the structure.
	fn contains(&self, a: &Self::Elem) -> bool;

	fn equality(&self, a: &Self::Elem, b: &Self::Elem) -> bool;

	fn addition(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

	fn negation(&self, a: &Self::Elem) -> Self::Elem;

	fn multiplication(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

	/// Computes the multiplicative inverse.
	///
	/// The behaviour at the additive identity is left to the implementation; [`crate::Ring`]
	/// never calls this method with zero.
	fn inversion(&self, a: &Self::Elem) -> Result<Self::Elem, Error>;
}
