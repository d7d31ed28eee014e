// Copyright 2024-2025 Irreducible Inc.

//! Optional TRACE events for algebra multiplications.
//!
//! With the `trace_multiplications` feature every top-level multiplication emits a single
//! `mul` event. Multiplications performed on behalf of an outer one, which happens when the
//! base field is itself a Cayley-Dickson algebra, are folded into the outer event.

use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_multiplications")] {
		use std::cell::Cell;

		thread_local! {
			/// Depth of the multiplication currently being traced on this thread.
			static OUTERMOST_DEPTH: Cell<Option<usize>> = const { Cell::new(None) };
		}

		/// Marks this thread as being inside a traced multiplication until dropped.
		pub(crate) struct MultiplicationScope {
			outermost: bool,
		}

		impl MultiplicationScope {
			pub fn enter<F>(depth: usize, dim: usize) -> Self {
				let outermost = OUTERMOST_DEPTH.with(|current| match current.get() {
					Some(_) => false,
					None => {
						current.set(Some(depth));
						tracing::event!(
							name: "mul",
							tracing::Level::TRACE,
							depth,
							dim,
							base = std::any::type_name::<F>(),
						);
						true
					}
				});
				Self { outermost }
			}
		}

		impl Drop for MultiplicationScope {
			fn drop(&mut self) {
				if self.outermost {
					OUTERMOST_DEPTH.with(|current| current.set(None));
				}
			}
		}

		macro_rules! trace_multiplication {
			($base: ty, $depth: expr, $dim: expr) => {
				let _scope = $crate::tracing::MultiplicationScope::enter::<$base>($depth, $dim);
			};
		}
	} else {
		macro_rules! trace_multiplication {
			($base: ty, $depth: expr, $dim: expr) => {};
		}
	}
}

pub(crate) use trace_multiplication;
