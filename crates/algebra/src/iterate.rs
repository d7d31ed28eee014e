// Copyright 2024-2025 Irreducible Inc.

use std::mem::size_of;

use cayley_ring::FieldDescriptor;
use cayley_utils::ensure;
use tracing::instrument;

use crate::{Algebra, CayleyDickson, Depth, Error};

/// Applies the Cayley-Dickson construction `iterations` times to `field`.
///
/// The base descriptor is checked for the basic sanity conditions a field must meet: its
/// identities must be members, and equality must be reflexive and tell them apart.
#[instrument("cayley_dickson::iterate", skip(field), level = "debug")]
pub fn iterate<F: FieldDescriptor>(field: F, iterations: usize) -> Result<Algebra<F>, Error> {
	iterate_depth(field, Depth::new(iterations)?)
}

/// Same as [`iterate`] with an already validated depth.
pub fn iterate_depth<F: FieldDescriptor>(field: F, depth: Depth) -> Result<Algebra<F>, Error> {
	validate_descriptor(&field)?;
	ensure!(fits_allocation::<F::Elem>(depth), Error::DepthTooLarge(depth.get()));

	let algebra = Algebra::new(CayleyDickson::new(field, depth));
	tracing::debug!(depth = depth.get(), dim = algebra.dim(), "built Cayley-Dickson algebra");
	Ok(algebra)
}

/// An element is a single `Vec` of `2^depth` components, which may not exceed `isize::MAX` bytes.
fn fits_allocation<T>(depth: Depth) -> bool {
	depth
		.dim()
		.checked_mul(size_of::<T>().max(1))
		.is_some_and(|bytes| bytes <= isize::MAX as usize)
}

fn validate_descriptor<F: FieldDescriptor>(field: &F) -> Result<(), Error> {
	let zero = field.zero();
	let one = field.one();

	ensure!(field.contains(&zero), Error::InvalidDescriptor("zero is not a member"));
	ensure!(field.contains(&one), Error::InvalidDescriptor("one is not a member"));
	ensure!(
		field.equality(&zero, &zero) && field.equality(&one, &one),
		Error::InvalidDescriptor("equality is not reflexive")
	);
	ensure!(!field.equality(&zero, &one), Error::InvalidDescriptor("zero equals one"));
	Ok(())
}
