// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when building or addressing a Cayley-Dickson algebra fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("the iteration count must be nonnegative, got {0}")]
	NegativeDepth(i64),
	#[error("the iteration count must be an integer, got {0}")]
	FractionalDepth(f64),
	#[error("the iteration count {0} is too large, elements of dimension 2^{0} cannot be allocated")]
	DepthTooLarge(usize),
	#[error("invalid field descriptor: {0}")]
	InvalidDescriptor(&'static str),
	#[error("argument has {actual} components, expected {expected}")]
	DimensionMismatch { expected: usize, actual: usize },
	#[error("index {index} is out of range 0..{max}")]
	IndexOutOfRange { index: usize, max: usize },
	/// Thrown when a component of an element is not a member of the base field.
	#[error("component {index} is not in the base field")]
	NotInField { index: usize },
	#[error("{0}")]
	RingError(#[from] cayley_ring::Error),
}
