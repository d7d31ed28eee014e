// Copyright 2024-2025 Irreducible Inc.

//! Concrete base fields and proptest strategies shared by the workspace tests and demos.
//!
//! The Cayley-Dickson crates never ship a number type of their own; everything here exists so
//! tests have something to build towers over.

mod integers;
mod prime_field;
mod reals;
pub mod strategies;

pub use integers::Integers;
pub use prime_field::{Mersenne31, PrimeField, GF7};
pub use reals::{approx_eq, Reals};
