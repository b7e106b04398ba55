// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use quickbench_table::{Column, ColumnValues, Table, TableError};

use crate::{CensusError, Result, reshape::numeric};

/// Group a long table by `group_col` and summarize `value_col` per group.
///
/// Output: one row per category in first-appearance order, with columns
/// `group_col`, `mean`, `median`, `min`, `max`, `sum`.
pub fn aggregate(table: &Table, group_col: &str, value_col: &str) -> Result<Table> {
	let groups = match &column(table, group_col)?.data {
		ColumnValues::Utf8(v) => v,
		other => {
			return Err(CensusError::Table(TableError::SchemaMismatch {
				reason: format!(
					"group column '{}' must be utf8, got {}",
					group_col,
					other.type_name()
				),
			}));
		}
	};
	let values = numeric(&column(table, value_col)?.data).ok_or_else(|| {
		CensusError::Table(TableError::SchemaMismatch {
			reason: format!("column '{}' is not numeric", value_col),
		})
	})?;

	let mut buckets: IndexMap<String, Vec<f64>> = IndexMap::new();
	for (group, value) in groups.iter().zip(values) {
		buckets.entry(group.clone()).or_default().push(value);
	}

	let mut names = Vec::with_capacity(buckets.len());
	let mut stats: [Vec<f64>; 5] = Default::default();
	for (name, samples) in buckets {
		names.push(name);
		let summary = describe_samples(&samples);
		for (column, value) in stats.iter_mut().zip(summary) {
			column.push(value);
		}
	}

	let [mean, median, min, max, sum] = stats;
	Ok(Table::new(vec![
		Column {
			name: group_col.to_string(),
			data: ColumnValues::Utf8(names),
		},
		Column::float8("mean", mean),
		Column::float8("median", median),
		Column::float8("min", min),
		Column::float8("max", max),
		Column::float8("sum", sum),
	]))
}

/// One-row summary of a single numeric column: mean, median, min, max, sum.
pub fn describe(table: &Table, value_col: &str) -> Result<Table> {
	let values = numeric(&column(table, value_col)?.data).ok_or_else(|| {
		CensusError::Table(TableError::SchemaMismatch {
			reason: format!("column '{}' is not numeric", value_col),
		})
	})?;

	let [mean, median, min, max, sum] = describe_samples(&values);
	Ok(Table::new(vec![
		Column::float8("mean", [mean]),
		Column::float8("median", [median]),
		Column::float8("min", [min]),
		Column::float8("max", [max]),
		Column::float8("sum", [sum]),
	]))
}

fn column<'a>(table: &'a Table, name: &str) -> Result<&'a Column> {
	table.column(name).ok_or_else(|| CensusError::MissingColumn {
		name: name.to_string(),
	})
}

fn describe_samples(samples: &[f64]) -> [f64; 5] {
	if samples.is_empty() {
		return [f64::NAN, f64::NAN, f64::NAN, f64::NAN, 0.0];
	}

	let sum: f64 = samples.iter().sum();
	let mean = sum / samples.len() as f64;

	let mut sorted = samples.to_vec();
	sorted.sort_by(|a, b| a.total_cmp(b));
	let mid = sorted.len() / 2;
	let median = if sorted.len() % 2 == 0 {
		(sorted[mid - 1] + sorted[mid]) / 2.0
	} else {
		sorted[mid]
	};

	[mean, median, sorted[0], sorted[sorted.len() - 1], sum]
}
