// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Display;

use anyhow::Result;
use cayley_dickson::{iterate, FieldDescriptor};
use cayley_test_utils::{Integers, Mersenne31, Reals, GF7};
use cayley_utils::tracing::init_tracing;
use clap::{value_parser, Parser};
use demos::{format_element, unit_label, BaseField};
use itertools::Itertools;

#[derive(Debug, Parser)]
struct Args {
	/// Number of Cayley-Dickson iterations applied to the base field.
	#[arg(short, long, default_value_t = 3, value_parser = value_parser!(u32).range(0..=6))]
	iterations: u32,
	/// The base field.
	#[arg(long, value_enum, default_value_t = BaseField::Integers)]
	base: BaseField,
}

fn print_table<F>(field: F, iterations: usize) -> Result<()>
where
	F: FieldDescriptor,
	F::Elem: Display,
{
	let algebra = iterate(field, iterations)?;
	let units = (0..algebra.dim())
		.map(|i| algebra.basis(i))
		.collect::<Result<Vec<_>, _>>()?;

	let width = format!("-e{}", algebra.dim() - 1).len();
	let header = (0..algebra.dim())
		.map(|j| format!("{:>width$}", format!("e{j}")))
		.join(" ");
	println!("{:>width$} | {header}", "");

	for (i, a) in units.iter().enumerate() {
		let cells = units
			.iter()
			.map(|b| {
				let product = algebra.mul(a, b);
				let label = unit_label(&algebra, &product).unwrap_or_else(|| format_element(&product));
				format!("{label:>width$}")
			})
			.join(" ");
		println!("{:>width$} | {cells}", format!("e{i}"));
	}
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	println!(
		"Multiplication table of the basis units after {} iterations over the {}",
		args.iterations, args.base
	);

	let iterations = args.iterations as usize;
	match args.base {
		BaseField::Reals => print_table(Reals, iterations),
		BaseField::Integers => print_table(Integers, iterations),
		BaseField::Gf7 => print_table(GF7::default(), iterations),
		BaseField::Mersenne31 => print_table(Mersenne31::default(), iterations),
	}
}
