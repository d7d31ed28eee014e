// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when a ring operation fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("expected at least 2 operands, got {got}")]
	NotEnoughOperands { got: usize },
	#[error("division by zero")]
	DivisionByZero,
	/// Thrown by base rings for non-zero elements without a multiplicative inverse.
	#[error("the element is not invertible")]
	NotInvertible,
}
