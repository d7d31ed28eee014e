// Copyright 2024-2025 Irreducible Inc.

//! Promotion of scalar operations to position-wise operations on fixed-length sequences.
//!
//! Addition and negation are linear in every component, so at any depth they are just the
//! base field operations applied position by position.

/// Turns a unary operation on scalars into an operation on sequences of length `dim`.
///
/// The input must have exactly `dim` components.
pub fn lift_unary<T, U, Op>(op: Op, dim: usize) -> impl Fn(&[T]) -> Vec<U>
where
	Op: Fn(&T) -> U,
{
	move |a| {
		debug_assert_eq!(a.len(), dim);
		a[..dim].iter().map(&op).collect()
	}
}

/// Turns a binary operation on scalars into an operation on pairs of sequences of length
/// `dim`.
///
/// Both inputs must have exactly `dim` components.
pub fn lift_binary<T, U, Op>(op: Op, dim: usize) -> impl Fn(&[T], &[T]) -> Vec<U>
where
	Op: Fn(&T, &T) -> U,
{
	move |a, b| {
		debug_assert_eq!(a.len(), dim);
		debug_assert_eq!(b.len(), dim);
		a[..dim]
			.iter()
			.zip(&b[..dim])
			.map(|(x, y)| op(x, y))
			.collect()
	}
}
