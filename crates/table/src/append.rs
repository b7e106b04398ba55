// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ColumnValues, Result, Table, TableError};

impl Table {
	/// Row-bind: append every row of `other` onto the matching columns.
	///
	/// The incoming batch must carry exactly the same columns, in the same
	/// order and with the same types, and must itself be rectangular. All
	/// checks run before any column is mutated, so a failed bind leaves
	/// the table untouched.
	pub fn append(&mut self, other: Table) -> Result<()> {
		if self.columns.len() != other.columns.len() {
			return Err(TableError::SchemaMismatch {
				reason: format!(
					"expected {} columns, got {}",
					self.columns.len(),
					other.columns.len()
				),
			});
		}

		for (lhs, rhs) in self.columns.iter().zip(other.columns.iter()) {
			if lhs.name != rhs.name {
				return Err(TableError::SchemaMismatch {
					reason: format!("column name mismatch: '{}' vs '{}'", lhs.name, rhs.name),
				});
			}
			if lhs.data.type_name() != rhs.data.type_name() {
				return Err(TableError::SchemaMismatch {
					reason: format!(
						"column type mismatch for '{}': {} vs {}",
						lhs.name,
						lhs.data.type_name(),
						rhs.data.type_name()
					),
				});
			}
		}

		if let Some(first) = other.columns.first() {
			let expected = first.data.len();
			for col in &other.columns {
				if col.data.len() != expected {
					return Err(TableError::SchemaMismatch {
						reason: format!(
							"ragged row batch: column '{}' has {} rows, expected {}",
							col.name,
							col.data.len(),
							expected
						),
					});
				}
			}
		}

		for (lhs, rhs) in self.columns.iter_mut().zip(other.columns.into_iter()) {
			match (&mut lhs.data, rhs.data) {
				(ColumnValues::Float8(l), ColumnValues::Float8(r)) => l.extend(r),
				(ColumnValues::Int8(l), ColumnValues::Int8(r)) => l.extend(r),
				(ColumnValues::Utf8(l), ColumnValues::Utf8(r)) => l.extend(r),
				// type equality was checked above
				(_, _) => unreachable!(),
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::{Column, ColumnValues, Table, TableError};

	fn one_row(expr: &str, median: f64) -> Table {
		Table::new(vec![Column::utf8("expr", [expr]), Column::float8("median", [median])])
	}

	#[test]
	fn test_append_preserves_row_order() {
		let mut table = one_row("c", 3.0);
		let mut batch = one_row("a", 1.0);
		batch.append(one_row("b", 2.0)).unwrap();

		table.append(batch).unwrap();

		assert_eq!(
			table.columns[0].data,
			ColumnValues::utf8(["c", "a", "b"].map(String::from))
		);
		assert_eq!(table.columns[1].data, ColumnValues::float8([3.0, 1.0, 2.0]));
		assert_eq!(table.row_count(), Ok(3));
	}

	#[test]
	fn test_append_fails_on_column_count_mismatch() {
		let mut table = one_row("a", 1.0);
		let batch = Table::new(vec![Column::utf8("expr", ["b"])]);

		let result = table.append(batch);
		assert!(matches!(result, Err(TableError::SchemaMismatch { .. })));
		assert_eq!(table.row_count(), Ok(1));
	}

	#[test]
	fn test_append_fails_on_column_name_mismatch() {
		let mut table = one_row("a", 1.0);
		let batch =
			Table::new(vec![Column::utf8("expr", ["b"]), Column::float8("wrong", [2.0])]);

		let result = table.append(batch);
		assert!(matches!(result, Err(TableError::SchemaMismatch { .. })));
	}

	#[test]
	fn test_append_fails_on_type_mismatch() {
		let mut table = one_row("a", 1.0);
		let batch = Table::new(vec![Column::utf8("expr", ["b"]), Column::int8("median", [2])]);

		let result = table.append(batch);
		assert!(matches!(result, Err(TableError::SchemaMismatch { .. })));
	}

	#[test]
	fn test_append_fails_on_ragged_batch() {
		let mut table = one_row("a", 1.0);
		let batch = Table {
			columns: vec![
				Column::utf8("expr", ["b", "c"]),
				Column::float8("median", [2.0]),
			],
		};

		let result = table.append(batch);
		assert!(matches!(result, Err(TableError::SchemaMismatch { .. })));
		// target must be untouched
		assert_eq!(table.row_count(), Ok(1));
	}
}
