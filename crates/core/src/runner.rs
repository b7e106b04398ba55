// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Instant;

use quickbench_expr::{Environment, ExprError, parse};
use quickbench_table::{Column, Table};
use tracing::debug;

use crate::{
	BenchError, BenchOptions,
	stats::{quantiles, scale},
};

/// Time a single expression and return its one-row result table.
///
/// The expression is parsed once, then evaluated `options.neval` times.
/// Each evaluation is timed individually and the quartiles of the sample
/// set make up the timing columns.
///
/// Columns: `expr`, `min`, `lq`, `median`, `uq`, `max`, `neval`.
pub fn bench(source: &str, env: &Environment, options: &BenchOptions) -> Result<Table, BenchError> {
	if options.neval == 0 {
		return Err(BenchError::InvalidArgument {
			reason: "neval must be at least 1".to_string(),
		});
	}

	let expr = parse(source)?;

	let mut samples = Vec::with_capacity(options.neval as usize);
	for _ in 0..options.neval {
		let start = Instant::now();
		let value = expr.evaluate(env).map_err(ExprError::from)?;
		samples.push(start.elapsed().as_secs_f64());
		std::hint::black_box(value);
	}

	// samples is non-empty since neval >= 1
	let summary = quantiles(&samples).ok_or_else(|| BenchError::InvalidArgument {
		reason: "no samples collected".to_string(),
	})?;
	debug!(
		expr = source,
		neval = options.neval,
		median_secs = summary[2],
		"benchmarked expression"
	);

	let [min, lq, median, uq, max] =
		summary.map(|seconds| scale(seconds, options.unit, options.digits));

	Ok(Table::new(vec![
		Column::utf8("expr", [source]),
		Column::float8("min", vec![min]),
		Column::float8("lq", vec![lq]),
		Column::float8("median", vec![median]),
		Column::float8("uq", vec![uq]),
		Column::float8("max", vec![max]),
		Column::int8("neval", vec![options.neval as i64]),
	]))
}

/// Time a sequence of expressions and stack their rows into one table,
/// preserving input order.
///
/// Any parse or evaluation failure aborts the whole run.
pub fn benchmark<I, S>(sources: I, env: &Environment, options: &BenchOptions) -> Result<Table, BenchError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut result: Option<Table> = None;

	for source in sources {
		let row = bench(source.as_ref(), env, options)?;
		match result.as_mut() {
			Some(table) => table.append(row)?,
			None => result = Some(row),
		}
	}

	result.ok_or_else(|| BenchError::InvalidArgument {
		reason: "no expressions to benchmark".to_string(),
	})
}
