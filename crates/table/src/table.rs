// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Column, Result, TableError};

/// Rectangular result set with a fixed column order.
///
/// Column order is set at construction and never reordered. Every column
/// has the same length after any public operation completes.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
	pub columns: Vec<Column>,
}

impl Table {
	pub fn new(columns: Vec<Column>) -> Self {
		debug_assert!(
			columns.windows(2).all(|w| w[0].data.len() == w[1].data.len()),
			"columns must have equal length"
		);
		Self {
			columns,
		}
	}

	/// Ordered column names.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.name.as_str())
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	/// Number of rows, taken from the first column.
	///
	/// Fails with [`TableError::EmptyTable`] when the table has no columns.
	pub fn row_count(&self) -> Result<usize> {
		self.columns.first().map(|c| c.data.len()).ok_or(TableError::EmptyTable)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Column;

	#[test]
	fn test_row_count() {
		let table = Table::new(vec![Column::int8("id", [1, 2, 3])]);
		assert_eq!(table.row_count(), Ok(3));
	}

	#[test]
	fn test_row_count_no_columns() {
		let table = Table::new(vec![]);
		assert_eq!(table.row_count(), Err(TableError::EmptyTable));
	}

	#[test]
	fn test_names_keep_insertion_order() {
		let table = Table::new(vec![
			Column::utf8("expr", []),
			Column::float8("min", []),
			Column::float8("max", []),
		]);
		let names: Vec<&str> = table.names().collect();
		assert_eq!(names, vec!["expr", "min", "max"]);
		assert_eq!(table.column_count(), 3);
	}
}
