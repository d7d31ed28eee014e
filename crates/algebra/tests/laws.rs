// Copyright 2024-2025 Irreducible Inc.

use cayley_dickson::iterate;
use cayley_test_utils::{
	approx_eq,
	strategies::{integer_elements, prime_field_elements, real_elements},
	Integers, Reals, GF7,
};
use itertools::iproduct;
use proptest::prelude::*;

fn integer_pair(max_depth: usize) -> impl Strategy<Value = (usize, Vec<i64>, Vec<i64>)> {
	(0..=max_depth).prop_flat_map(|depth| {
		(Just(depth), integer_elements(1 << depth), integer_elements(1 << depth))
	})
}

fn integer_triple(
	max_depth: usize,
) -> impl Strategy<Value = (usize, Vec<i64>, Vec<i64>, Vec<i64>)> {
	(0..=max_depth).prop_flat_map(|depth| {
		(
			Just(depth),
			integer_elements(1 << depth),
			integer_elements(1 << depth),
			integer_elements(1 << depth),
		)
	})
}

proptest! {
	#[test]
	fn test_operations_preserve_length((depth, a, b) in integer_pair(5)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert_eq!(algebra.add(&a, &b).len(), 1 << depth);
		prop_assert_eq!(algebra.mul(&a, &b).len(), 1 << depth);
		prop_assert_eq!(algebra.negation(&a).len(), 1 << depth);
		prop_assert_eq!(algebra.conjugation(&a).len(), 1 << depth);
	}

	#[test]
	fn test_identities((depth, a, _b) in integer_pair(5)) {
		let algebra = iterate(Integers, depth).unwrap();
		let zero = algebra.zero();
		let one = algebra.one();
		prop_assert_eq!(algebra.add(&a, &zero), a.clone());
		prop_assert_eq!(algebra.mul(&a, &one), a.clone());
		prop_assert_eq!(algebra.mul(&one, &a), a.clone());
		prop_assert!(algebra.is_zero(&algebra.add(&a, &algebra.negation(&a))));
	}

	#[test]
	fn test_conjugation_is_an_involution((depth, a, b) in integer_pair(4)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert_eq!(algebra.conjugation(&algebra.conjugation(&a)), a.clone());
		// The conjugate of a product is the product of the conjugates in reverse order.
		prop_assert_eq!(
			algebra.conjugation(&algebra.mul(&a, &b)),
			algebra.mul(&algebra.conjugation(&b), &algebra.conjugation(&a))
		);
	}

	#[test]
	fn test_norm_is_real((depth, a, _b) in integer_pair(5)) {
		let algebra = iterate(Integers, depth).unwrap();
		let norm = algebra.norm(&a);
		prop_assert_eq!(algebra.mul(&a, &algebra.conjugation(&a)), algebra.scalar(norm));
		prop_assert_eq!(norm, a.iter().map(|x| x * x).sum::<i64>());
	}

	#[test]
	fn test_norm_is_multiplicative((depth, a, b) in integer_pair(3)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert_eq!(
			algebra.norm(&algebra.mul(&a, &b)),
			algebra.norm(&a) * algebra.norm(&b)
		);
	}

	#[test]
	fn test_norm_is_multiplicative_over_finite_field(
		(depth, a, b) in (0usize..=3).prop_flat_map(|depth| {
			(
				Just(depth),
				prime_field_elements::<7>(1 << depth),
				prime_field_elements::<7>(1 << depth),
			)
		})
	) {
		let algebra = iterate(GF7::default(), depth).unwrap();
		let field = algebra.base_field();
		prop_assert_eq!(
			algebra.norm(&algebra.mul(&a, &b)),
			field.mul(&algebra.norm(&a), &algebra.norm(&b))
		);
	}

	#[test]
	fn test_associativity_up_to_quaternions((depth, a, b, c) in integer_triple(2)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert!(algebra.is_zero(&algebra.associator(&a, &b, &c)));
	}

	#[test]
	fn test_commutativity_up_to_complex((depth, a, b) in integer_pair(1)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert!(algebra.is_zero(&algebra.commutator(&a, &b)));
	}

	#[test]
	fn test_alternativity_up_to_octonions((depth, a, b) in integer_pair(3)) {
		let algebra = iterate(Integers, depth).unwrap();
		prop_assert!(algebra.is_zero(&algebra.associator(&a, &a, &b)));
		prop_assert!(algebra.is_zero(&algebra.associator(&a, &b, &b)));
	}

	#[test]
	fn test_power_associativity((depth, a, _b) in integer_pair(4), exp in 0u64..4) {
		let algebra = iterate(Integers, depth).unwrap();
		let mut expected = algebra.one();
		for _ in 0..exp {
			expected = algebra.mul(&expected, &a);
		}
		prop_assert_eq!(algebra.pow(&a, exp), expected);
	}

	#[test]
	fn test_inverse_over_reals(
		(depth, a) in (0usize..=4).prop_flat_map(|depth| (Just(depth), real_elements(1 << depth)))
	) {
		let algebra = iterate(Reals, depth).unwrap();
		prop_assume!(algebra.norm(&a) > 1e-3);

		let inverse = algebra.inversion(&a).unwrap();
		prop_assert!(approx_eq(&algebra.mul(&a, &inverse), &algebra.one(), 1e-9));
		prop_assert!(approx_eq(&algebra.mul(&inverse, &a), &algebra.one(), 1e-9));
	}
}

#[test]
fn test_basis_units_multiply_by_index_xor() {
	let octonions = iterate(Integers, 3).unwrap();
	for (i, j) in iproduct!(0..8, 0..8) {
		let product = octonions.mul(&octonions.basis(i).unwrap(), &octonions.basis(j).unwrap());
		let unit = octonions.basis(i ^ j).unwrap();
		assert!(
			product == unit || product == octonions.negation(&unit),
			"e{i} e{j} = {product:?}"
		);
	}
}
