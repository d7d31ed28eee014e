// Copyright 2024-2025 Irreducible Inc.

use cayley_ring::{Error, FieldDescriptor};

/// The prime field `F_p`, elements are canonical representatives in `0..P`.
///
/// `P` must be prime; this is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimeField<const P: u64>;

pub type GF7 = PrimeField<7>;

/// The prime field `F_p` where `p = 2^31 - 1`.
pub type Mersenne31 = PrimeField<{ (1 << 31) - 1 }>;

impl<const P: u64> PrimeField<P> {
	pub const ORDER: u64 = P;

	/// Reduces an arbitrary integer into the field.
	pub fn reduce(value: i64) -> u64 {
		value.rem_euclid(P as i64) as u64
	}

	fn mod_pow(base: u64, mut exp: u64) -> u64 {
		let mut base = base as u128;
		let mut result = 1u128;
		while exp > 0 {
			if exp & 1 == 1 {
				result = result * base % P as u128;
			}
			base = base * base % P as u128;
			exp >>= 1;
		}
		result as u64
	}
}

impl<const P: u64> FieldDescriptor for PrimeField<P> {
	type Elem = u64;

	fn zero(&self) -> u64 {
		0
	}

	fn one(&self) -> u64 {
		1
	}

	fn contains(&self, a: &u64) -> bool {
		*a < P
	}

	fn equality(&self, a: &u64, b: &u64) -> bool {
		a == b
	}

	fn addition(&self, a: &u64, b: &u64) -> u64 {
		((*a as u128 + *b as u128) % P as u128) as u64
	}

	fn negation(&self, a: &u64) -> u64 {
		(P - a % P) % P
	}

	fn multiplication(&self, a: &u64, b: &u64) -> u64 {
		(*a as u128 * *b as u128 % P as u128) as u64
	}

	fn inversion(&self, a: &u64) -> Result<u64, Error> {
		// The nonzero elements form a group of order p - 1, so a^(p - 2) = a^(-1).
		if a % P == 0 {
			return Err(Error::DivisionByZero);
		}
		Ok(Self::mod_pow(*a, P - 2))
	}
}
