// Copyright 2024-2025 Irreducible Inc.

//! Generic ring and field wrapper.
//!
//! A [`FieldDescriptor`] supplies the primitive operations of an algebraic structure: the two
//! identities, membership, equality, addition, negation, multiplication and inversion. [`Ring`]
//! derives the conventional operation family from those primitives (subtraction, division,
//! disequality, non-membership) and promotes every binary arithmetic operation to a variadic
//! left fold.

mod descriptor;
pub mod error;
mod ring;
pub mod variadic;

pub use descriptor::FieldDescriptor;
pub use error::Error;
pub use ring::Ring;
pub use variadic::{fold_left, variadic};
