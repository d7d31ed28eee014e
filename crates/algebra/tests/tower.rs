// Copyright 2024-2025 Irreducible Inc.

use assert_matches::assert_matches;
use cayley_dickson::{iterate, Depth, Error, FieldDescriptor};
use cayley_test_utils::{Integers, PrimeField, Reals, GF7};

#[test]
fn test_reals() {
	let reals = iterate(Reals, 0).unwrap();
	assert_eq!(reals.addition([&vec![1.0], &vec![2.0]]), Ok(vec![3.0]));
	assert_eq!(reals.multiplication([&vec![-3.0], &vec![2.0]]), Ok(vec![-6.0]));
	assert_eq!(reals.inversion(&vec![2.0]), Ok(vec![0.5]));
	assert_eq!(reals.norm(&[-3.0]), 9.0);
	assert_eq!(reals.conjugation(&[-3.0]), vec![-3.0]);
}

#[test]
fn test_complex() {
	let complex = iterate(Reals, 1).unwrap();
	let i = vec![0.0, 1.0];
	assert_eq!(complex.multiplication([&i, &i]), Ok(vec![-1.0, 0.0]));
	assert_eq!(complex.conjugation(&[1.0, 2.0]), vec![1.0, -2.0]);
	assert_eq!(complex.multiplication([&vec![1.0, 2.0], &vec![1.0, -2.0]]), Ok(vec![5.0, 0.0]));
	assert_eq!(complex.norm(&[1.0, 2.0]), 5.0);

	// Multiplication is still commutative.
	let a = vec![1.0, 2.0];
	let b = vec![3.0, 4.0];
	assert_eq!(complex.mul(&a, &b), vec![-5.0, 10.0]);
	assert_eq!(complex.mul(&b, &a), vec![-5.0, 10.0]);
}

#[test]
fn test_quaternions() {
	let quaternions = iterate(Reals, 2).unwrap();
	let minus_one = vec![-1.0, 0.0, 0.0, 0.0];
	let i = vec![0.0, 1.0, 0.0, 0.0];
	let j = vec![0.0, 0.0, 1.0, 0.0];
	let k = vec![0.0, 0.0, 0.0, 1.0];

	assert_eq!(quaternions.multiplication([&i, &i]), Ok(minus_one.clone()));
	assert_eq!(quaternions.multiplication([&j, &j]), Ok(minus_one.clone()));
	assert_eq!(quaternions.multiplication([&k, &k]), Ok(minus_one.clone()));
	assert_eq!(quaternions.multiplication([&i, &j, &k]), Ok(minus_one));

	assert!(quaternions.disequality(&quaternions.mul(&i, &j), &quaternions.mul(&j, &i)));
	assert_eq!(quaternions.mul(&i, &j), k);
}

#[test]
fn test_quaternion_products_are_order_dependent() {
	let quaternions = iterate(Integers, 2).unwrap();
	let a = vec![1, 2, 3, 4];
	let b = vec![5, 6, 7, 8];
	assert_eq!(quaternions.mul(&a, &b), vec![-60, 12, 30, 24]);
	assert_eq!(quaternions.mul(&b, &a), vec![-60, 20, 14, 32]);
}

#[test]
fn test_octonions() {
	let octonions = iterate(Reals, 3).unwrap();
	let i1 = octonions.basis(1).unwrap();
	assert_eq!(octonions.multiplication([&i1, &i1]), Ok(octonions.scalar(-1.0)));

	let [e1, e2, e4] = [1, 2, 4].map(|n| octonions.basis(n).unwrap());
	let left = octonions.mul(&octonions.mul(&e1, &e2), &e4);
	let right = octonions.mul(&e1, &octonions.mul(&e2, &e4));
	assert!(octonions.disequality(&left, &right));
	assert_eq!(left, octonions.basis(7).unwrap());
	assert_eq!(right, octonions.negation(&left));
}

#[test]
fn test_octonion_norm_is_multiplicative() {
	let octonions = iterate(Integers, 3).unwrap();
	let a = vec![1, 2, 3, 4, 5, 6, 7, 8];
	let b = vec![8, -7, 6, -5, 4, -3, 2, -1];
	let product = octonions.mul(&a, &b);
	assert_eq!(product, vec![16, -46, 12, -10, 8, 182, 76, 6]);
	assert_eq!(octonions.norm(&product), octonions.norm(&a) * octonions.norm(&b));
}

#[test]
fn test_sedenions_have_zero_divisors() {
	let sedenions = iterate(Integers, 4).unwrap();
	let mut a = sedenions.basis(1).unwrap();
	a[10] = 1;
	let mut b = sedenions.basis(4).unwrap();
	b[15] = -1;

	assert!(sedenions.is_zero(&sedenions.mul(&a, &b)));
	assert_eq!(sedenions.norm(&a) * sedenions.norm(&b), 4);
}

#[test]
fn test_stacked_towers_match_depth() {
	let complex = iterate(Reals, 1).unwrap();
	let bicomplex = iterate(complex, 1).unwrap();
	assert_eq!(bicomplex.dim(), 2);
	assert_eq!(bicomplex.base_field().descriptor().dim(), 2);

	// Conjugation is the identity on the complex halves here, so the product commutes.
	let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
	let b = vec![vec![-1.0, 0.5], vec![2.0, -3.0]];
	assert!(bicomplex.equality(&bicomplex.mul(&a, &b), &bicomplex.mul(&b, &a)));
}

#[test]
fn test_zero_norm_inversion_over_finite_field() {
	let quaternions = iterate(GF7::default(), 2).unwrap();
	let a = vec![1, 1, 2, 1];
	assert_eq!(quaternions.norm(&a), 0);
	assert!(!quaternions.is_zero(&a));
	assert_eq!(quaternions.inversion(&a), Err(cayley_ring::Error::DivisionByZero));

	let b = vec![1, 1, 0, 0];
	let inverse = quaternions.inversion(&b).unwrap();
	assert_eq!(inverse, vec![4, 3, 0, 0]);
	assert_eq!(quaternions.mul(&b, &inverse), quaternions.one());
}

#[test]
fn test_prime_field_reduction() {
	let complex = iterate(PrimeField::<5>, 1).unwrap();
	let i = complex.basis(1).unwrap();
	assert_eq!(complex.square(&i), vec![PrimeField::<5>::reduce(-1), 0]);
	// 2 squares to -1 mod 5, so 2 - i is a zero divisor.
	let a = vec![2, 4];
	assert_eq!(complex.mul(&a, &vec![2, 1]), complex.zero());
}

#[test]
fn test_iteration_counts() {
	assert_matches!(Depth::try_from(-1i64), Err(Error::NegativeDepth(-1)));
	assert_matches!(Depth::try_from(1.5f64), Err(Error::FractionalDepth(_)));
	assert_matches!(iterate(Reals, 64), Err(Error::DepthTooLarge(64)));

	let depth = Depth::try_from(3.0f64).unwrap();
	let octonions = cayley_dickson::iterate_depth(Integers, depth).unwrap();
	assert_eq!(octonions.dim(), 8);
	assert_eq!(FieldDescriptor::zero(&octonions), vec![0; 8]);
}
