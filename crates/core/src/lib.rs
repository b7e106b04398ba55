// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Expression microbenchmarking.
//!
//! [`bench`] times a single expression against an explicit
//! [`Environment`](quickbench_expr::Environment) and returns a one-row
//! result table. [`benchmark`] (and the [`benchmark!`] macro for inline
//! expression lists) stacks several of those rows into one table.
//!
//! ```
//! use quickbench_core::{BenchOptions, TimeUnit, bench};
//! use quickbench_expr::{Environment, Value};
//!
//! let mut env = Environment::new();
//! env.bind("x", Value::Int(42));
//!
//! let options = BenchOptions::new().neval(100).unit(TimeUnit::Micros);
//! let table = bench("x * x + 1", &env, &options).unwrap();
//! println!("{}", table);
//! ```

mod error;
mod options;
mod runner;
pub mod stats;

pub use error::BenchError;
pub use options::{BenchOptions, TimeUnit};
pub use runner::{bench, benchmark};

pub type Result<T> = std::result::Result<T, BenchError>;

/// Benchmark a fixed list of expression literals.
///
/// Expands to a [`benchmark`] call over the listed sources:
///
/// ```
/// use quickbench_core::BenchOptions;
/// use quickbench_expr::Environment;
///
/// let env = Environment::new();
/// let options = BenchOptions::default();
/// let table = quickbench_core::benchmark!(&env, &options; "1 + 1", "2 * 3").unwrap();
/// assert_eq!(table.row_count().unwrap(), 2);
/// ```
#[macro_export]
macro_rules! benchmark {
	($env:expr, $options:expr; $($source:expr),+ $(,)?) => {
		$crate::benchmark([$($source),+], $env, $options)
	};
}
