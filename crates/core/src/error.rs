// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quickbench_expr::ExprError;
use quickbench_table::TableError;
use thiserror::Error;

/// Benchmark error types.
#[derive(Debug, Error)]
pub enum BenchError {
	#[error("invalid argument: {reason}")]
	InvalidArgument {
		reason: String,
	},

	#[error(transparent)]
	Expression(#[from] ExprError),

	#[error(transparent)]
	Table(#[from] TableError),
}
