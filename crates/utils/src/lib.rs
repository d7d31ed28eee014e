// Copyright 2024-2025 Irreducible Inc.

//! Shared helpers for the Cayley-Dickson workspace: early-return macros, power-of-two
//! arithmetic, environment flags, thread pool and tracing setup.

pub mod checked_arithmetics;
pub mod env;
pub mod error_utils;
pub mod rayon;
pub mod tracing;
