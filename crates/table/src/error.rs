// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

/// Table error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
	#[error("table has no columns")]
	EmptyTable,

	#[error("schema mismatch: {reason}")]
	SchemaMismatch {
		reason: String,
	},
}
