// Copyright 2024-2025 Irreducible Inc.

//! The recursive Cayley-Dickson operators.
//!
//! Every operator is parameterized by the depth of its operands. An element of depth $n$ is
//! a slice of $2^n$ base field elements; for $n \ge 1$ it is split into a lower half $p$ and an
//! upper half $q$, both of depth $n - 1$.

use std::iter;

use cayley_ring::{FieldDescriptor, Ring};
use cayley_utils::checked_arithmetics::checked_int_div;

use crate::lift::{lift_binary, lift_unary};

/// Builds the conjugation operator at `depth`.
///
/// Scalars are self-conjugate. Above depth 0 the conjugate of $(p, q)$ is $(\bar{p}, -q)$, which
/// unrolls to negating every component except the first.
pub fn build_conjugation<F: FieldDescriptor>(
	field: &F,
	depth: usize,
) -> impl Fn(&[F::Elem]) -> Vec<F::Elem> + '_ {
	move |b| {
		if depth == 0 {
			return b.to_vec();
		}

		let dim = 1 << depth;
		debug_assert_eq!(b.len(), dim);

		iter::once(b[0].clone())
			.chain(b[1..dim].iter().map(|x| field.negation(x)))
			.collect()
	}
}

/// Builds the multiplication operator at `depth`.
///
/// At depth 0 this is the base field product wrapped into a sequence of length one.
pub fn build_multiplication<F: FieldDescriptor>(
	field: &F,
	depth: usize,
) -> impl Fn(&[F::Elem], &[F::Elem]) -> Vec<F::Elem> + '_ {
	move |a, b| multiply(field, depth, a, b)
}

fn multiply<F: FieldDescriptor>(
	field: &F,
	depth: usize,
	a: &[F::Elem],
	b: &[F::Elem],
) -> Vec<F::Elem> {
	if depth == 0 {
		return vec![field.multiplication(&a[0], &b[0])];
	}

	let dim = 1 << depth;
	let half_dim = checked_int_div(dim, 2);
	debug_assert_eq!(a.len(), dim);
	debug_assert_eq!(b.len(), dim);

	let add = lift_binary(|x, y| field.addition(x, y), half_dim);
	let neg = lift_unary(|x| field.negation(x), half_dim);
	let conj = build_conjugation(field, depth - 1);
	let mul = build_multiplication(field, depth - 1);

	//      a = (p, q)
	//      b = (r, s)
	//
	// (p, q)(r, s) = (pr - s'q, sp + qr')
	//
	// where x' is the conjugate of x. The operand order in sp and qr' matters from depth 2 on.
	let (p, q) = a.split_at(half_dim);
	let (r, s) = b.split_at(half_dim);

	let mut t = add(&mul(p, r), &neg(&mul(&conj(s), q)));
	let u = add(&mul(s, p), &mul(q, &conj(r)));

	t.extend(u);
	t
}

/// The norm $a \bar{a}$ folded into a single base field element.
///
/// For a well-behaved base field $a \bar{a}$ only has a first component, but all components
/// are summed.
pub fn norm<F: FieldDescriptor>(field: &F, depth: usize, a: &[F::Elem]) -> F::Elem {
	let conj = build_conjugation(field, depth);
	let mul = build_multiplication(field, depth);

	mul(a, &conj(a))
		.iter()
		.fold(field.zero(), |acc, x| field.addition(&acc, x))
}

/// The inverse $\bar{a} / N(a)$.
///
/// Fails with [`cayley_ring::Error::DivisionByZero`] when the norm vanishes, which over the
/// reals only happens at zero but over other fields can happen for non-zero elements.
pub fn invert<F: FieldDescriptor>(
	field: &Ring<F>,
	depth: usize,
	a: &[F::Elem],
) -> Result<Vec<F::Elem>, cayley_ring::Error> {
	let norm = norm(field, depth, a);
	build_conjugation(field, depth)(a)
		.iter()
		.map(|x| field.div(x, &norm))
		.collect()
}
