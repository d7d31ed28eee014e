// Copyright 2024-2025 Irreducible Inc.

//! The Cayley-Dickson construction over arbitrary fields.
//!
//! Starting from a base field described by a [`FieldDescriptor`], [`iterate`] applies the
//! construction $n$ times and returns an [`Algebra`] of dimension $2^n$ whose elements are
//! sequences of $2^n$ base field elements. Over the reals one iteration yields the complex
//! numbers, two the quaternions, three the octonions and four the sedenions.
//!
//! An element at depth $n \ge 1$ is read as a pair of halves $(p, q)$ of depth $n - 1$, and
//! multiplication is defined by
//!
//! $$(p, q)(r, s) = (pr - \bar{s}q, sp + q\bar{r}).$$
//!
//! Multiplication stops being commutative at depth 2 and associative at depth 3. The returned
//! algebra is itself a [`FieldDescriptor`], so towers can be stacked further.

mod algebra;
mod cayley_dickson;
pub mod construction;
mod depth;
pub mod error;
mod iterate;
pub mod lift;
mod tracing;

pub use algebra::Algebra;
pub use cayley_dickson::CayleyDickson;
pub use cayley_ring::{FieldDescriptor, Ring};
pub use depth::Depth;
pub use error::Error;
pub use iterate::{iterate, iterate_depth};
