// Copyright 2024-2025 Irreducible Inc.

//! Promotion of binary operations to operations over two or more operands.

use crate::Error;

/// Folds `operands` from the left with `op`.
///
/// `fold_left([a, b, c], op)` computes `op(op(a, b), c)`. Fewer than two operands is an
/// error, a single operand is not silently returned.
pub fn fold_left<'a, T, Op>(operands: impl IntoIterator<Item = &'a T>, mut op: Op) -> Result<T, Error>
where
	T: 'a,
	Op: FnMut(&T, &T) -> Result<T, Error>,
{
	let mut operands = operands.into_iter();
	let (first, second) = match (operands.next(), operands.next()) {
		(Some(first), Some(second)) => (first, second),
		(first, _) => {
			return Err(Error::NotEnoughOperands {
				got: first.map_or(0, |_| 1),
			})
		}
	};

	operands.try_fold(op(first, second)?, |acc, next| op(&acc, next))
}

/// Turns a binary operation into a reducer over slices of two or more operands.
pub fn variadic<T, Op>(op: Op) -> impl Fn(&[T]) -> Result<T, Error>
where
	Op: Fn(&T, &T) -> Result<T, Error>,
{
	move |operands| fold_left(operands, &op)
}
