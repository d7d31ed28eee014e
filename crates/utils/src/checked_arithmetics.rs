// Copyright 2024-2025 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}

/// Returns `2^exp`, or `None` if the result does not fit into `usize`.
pub const fn checked_pow_2(exp: usize) -> Option<usize> {
	if exp >= usize::BITS as usize {
		None
	} else {
		Some(1 << exp)
	}
}
