// Copyright 2024-2025 Irreducible Inc.

//! Helpers shared by the demo programs.

use std::fmt::{self, Display};

use cayley_dickson::{Algebra, FieldDescriptor};
use clap::ValueEnum;
use itertools::Itertools;

/// Base fields selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BaseField {
	Reals,
	Integers,
	Gf7,
	Mersenne31,
}

impl Display for BaseField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Reals => "reals",
			Self::Integers => "integers",
			Self::Gf7 => "gf7",
			Self::Mersenne31 => "mersenne31",
		};
		write!(f, "{name}")
	}
}

/// Formats an element as a signed sum of basis units, e.g. `3 - 2e1 + e5`.
pub fn format_element<T: Display>(components: &[T]) -> String {
	let terms = components
		.iter()
		.enumerate()
		.map(|(i, x)| (i, x.to_string()))
		.filter(|(_, x)| !is_zero_literal(x))
		.map(|(i, x)| match i {
			0 => x,
			_ => match x.as_str() {
				"1" => format!("e{i}"),
				"-1" => format!("-e{i}"),
				_ => format!("{x}e{i}"),
			},
		})
		.join(" + ")
		.replace("+ -", "- ");

	if terms.is_empty() {
		"0".to_string()
	} else {
		terms
	}
}

fn is_zero_literal(x: &str) -> bool {
	matches!(x, "0" | "-0")
}

/// Labels `a` as a signed basis unit `±e_k` when it is one.
#[allow(clippy::ptr_arg)]
pub fn unit_label<F: FieldDescriptor>(algebra: &Algebra<F>, a: &Vec<F::Elem>) -> Option<String> {
	(0..algebra.dim()).find_map(|k| {
		let unit = algebra.basis(k).ok()?;
		if algebra.equality(a, &unit) {
			Some(format!("e{k}"))
		} else if algebra.equality(a, &algebra.negation(&unit)) {
			Some(format!("-e{k}"))
		} else {
			None
		}
	})
}
