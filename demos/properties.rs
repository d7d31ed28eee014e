// Copyright 2024-2025 Irreducible Inc.

use anyhow::Result;
use cayley_dickson::{iterate, Algebra};
use cayley_test_utils::Integers;
use cayley_utils::{rayon::adjust_thread_pool, tracing::init_tracing};
use clap::{value_parser, Parser};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::instrument;

#[derive(Debug, Parser)]
struct Args {
	/// Highest number of Cayley-Dickson iterations to examine.
	#[arg(short, long, default_value_t = 5, value_parser = value_parser!(u32).range(0..=7))]
	iterations: u32,
	/// Number of random samples checked per law and depth.
	#[arg(short, long, default_value_t = 1024, value_parser = value_parser!(u64).range(1..))]
	samples: u64,
	/// Seed of the sampling RNG.
	#[arg(long, default_value_t = 0)]
	seed: u64,
}

/// Outcome of sampling the algebraic laws at a single depth.
#[derive(Debug, Default, Clone, Copy)]
struct Laws {
	commutative: bool,
	associative: bool,
	alternative: bool,
	composition: bool,
}

fn random_element(algebra: &Algebra<Integers>, rng: &mut StdRng) -> Vec<i64> {
	(0..algebra.dim()).map(|_| rng.gen_range(-10..=10)).collect()
}

/// Checks the laws on `samples` random triples. A law holds if no sample violates it.
#[instrument(skip(algebra), fields(dim = algebra.dim()))]
fn sample_laws(algebra: &Algebra<Integers>, samples: u64, seed: u64) -> Laws {
	let violations = (0..samples)
		.into_par_iter()
		.map(|sample| {
			let mut rng = StdRng::seed_from_u64(seed ^ sample);
			let [a, b, c] = [(); 3].map(|_| random_element(algebra, &mut rng));

			let norm_of_product = algebra.norm(&algebra.mul(&a, &b));
			Laws {
				commutative: !algebra.is_zero(&algebra.commutator(&a, &b)),
				associative: !algebra.is_zero(&algebra.associator(&a, &b, &c)),
				alternative: !algebra.is_zero(&algebra.associator(&a, &a, &b)),
				composition: norm_of_product != algebra.norm(&a) * algebra.norm(&b),
			}
		})
		.reduce(Laws::default, |x, y| Laws {
			commutative: x.commutative || y.commutative,
			associative: x.associative || y.associative,
			alternative: x.alternative || y.alternative,
			composition: x.composition || y.composition,
		});

	tracing::debug!(?violations, "sampled laws");
	Laws {
		commutative: !violations.commutative,
		associative: !violations.associative,
		alternative: !violations.alternative,
		composition: !violations.composition,
	}
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();
	init_tracing();

	println!(
		"Sampling {} triples per depth over the integers, up to {} iterations",
		args.samples, args.iterations
	);
	println!(
		"{:>5} {:>5} | {:>11} {:>11} {:>11} {:>11}",
		"depth", "dim", "commutative", "associative", "alternative", "composition"
	);

	for depth in 0..=args.iterations as usize {
		let algebra = iterate(Integers, depth)?;
		let laws = sample_laws(&algebra, args.samples, args.seed);
		println!(
			"{depth:>5} {:>5} | {:>11} {:>11} {:>11} {:>11}",
			algebra.dim(),
			laws.commutative,
			laws.associative,
			laws.alternative,
			laws.composition
		);
	}
	Ok(())
}
