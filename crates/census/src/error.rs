// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quickbench_table::TableError;
use thiserror::Error;

/// Census pipeline error types.
#[derive(Debug, Error)]
pub enum CensusError {
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("malformed record at line {line}")]
	Parse {
		line: u64,
	},

	#[error("column '{name}' not found")]
	MissingColumn {
		name: String,
	},

	#[error("invalid column pattern: {0}")]
	BadPattern(#[from] regex::Error),

	#[error(transparent)]
	Table(#[from] TableError),
}
