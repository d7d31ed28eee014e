// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Configures the global rayon pool once per process.
///
/// When `RAYON_NUM_THREADS` is set to 1 the pool runs on the calling thread, which keeps traces
/// of the sampling demos readable. Any other value is left to rayon's own handling.
///
/// NOTE: rayon doesn't allow initializing the global thread pool several times. The function
/// returns a reference to the cached result because `ThreadPoolBuildError` doesn't implement
/// `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}
