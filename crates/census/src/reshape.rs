// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quickbench_table::{Column, ColumnValues, Table, TableError};
use regex::Regex;

use crate::{CensusError, Result};

/// Turn a wide topic table into tidy long form: one row per id-row ×
/// value-column, with the source column name under `var_name` and its cell
/// under `value_name`.
///
/// Every non-id column must be numeric. Rows come out variable-major: all
/// rows of the first value column first, matching the wide column order.
pub fn melt(table: &Table, id_cols: &[&str], var_name: &str, value_name: &str) -> Result<Table> {
	let rows = table.row_count()?;

	let mut ids = Vec::with_capacity(id_cols.len());
	for name in id_cols {
		let column = table.column(name).ok_or_else(|| CensusError::MissingColumn {
			name: name.to_string(),
		})?;
		ids.push(column);
	}

	let value_columns: Vec<&Column> =
		table.columns.iter().filter(|c| !id_cols.contains(&c.name.as_str())).collect();

	let mut variables = Vec::with_capacity(rows * value_columns.len());
	let mut values = Vec::with_capacity(rows * value_columns.len());
	for column in &value_columns {
		let cells = numeric(&column.data).ok_or_else(|| non_numeric(&column.name))?;
		for cell in cells {
			variables.push(column.name.clone());
			values.push(cell);
		}
	}

	let mut columns: Vec<Column> = ids
		.into_iter()
		.map(|c| Column {
			name: c.name.clone(),
			data: tile(&c.data, value_columns.len()),
		})
		.collect();
	columns.push(Column {
		name: var_name.to_string(),
		data: ColumnValues::Utf8(variables),
	});
	columns.push(Column {
		name: value_name.to_string(),
		data: ColumnValues::Float8(values),
	});

	Ok(Table::new(columns))
}

/// Row-wise sum of every numeric column whose name matches `pattern`,
/// returned as a fresh `Float8` column called `name`.
pub fn sum_matching(table: &Table, pattern: &str, name: &str) -> Result<Column> {
	let matcher = Regex::new(pattern)?;
	let matching: Vec<&Column> =
		table.columns.iter().filter(|c| matcher.is_match(&c.name)).collect();
	if matching.is_empty() {
		return Err(CensusError::MissingColumn {
			name: pattern.to_string(),
		});
	}

	let mut totals = vec![0.0; matching[0].data.len()];
	for column in matching {
		let cells = numeric(&column.data).ok_or_else(|| non_numeric(&column.name))?;
		for (total, cell) in totals.iter_mut().zip(cells) {
			*total += cell;
		}
	}

	Ok(Column {
		name: name.to_string(),
		data: ColumnValues::Float8(totals),
	})
}

/// Collapse per-gender age columns into combined brackets: each pair
/// `Male <bracket>` + `Female <bracket>` becomes one `Age <bracket>` column.
/// Geography columns pass through untouched.
pub fn combine_age_brackets(table: &Table) -> Result<Table> {
	let mut columns: Vec<Column> =
		table.columns.iter().filter(|c| c.name.contains("Geog")).cloned().collect();

	for column in &table.columns {
		if !column.name.contains("Male") {
			continue;
		}
		let counterpart_name = column.name.replace("Male", "Female");
		let counterpart =
			table.column(&counterpart_name).ok_or_else(|| CensusError::MissingColumn {
				name: counterpart_name.clone(),
			})?;

		let male = numeric(&column.data).ok_or_else(|| non_numeric(&column.name))?;
		let female = numeric(&counterpart.data).ok_or_else(|| non_numeric(&counterpart_name))?;
		let combined = male.into_iter().zip(female).map(|(m, f)| m + f);

		columns.push(Column {
			name: column.name.replace("Male", "Age"),
			data: ColumnValues::float8(combined),
		});
	}

	Ok(Table::new(columns))
}

/// Numeric view of a column, promoting ints to floats.
pub(crate) fn numeric(values: &ColumnValues) -> Option<Vec<f64>> {
	match values {
		ColumnValues::Float8(v) => Some(v.clone()),
		ColumnValues::Int8(v) => Some(v.iter().map(|&x| x as f64).collect()),
		ColumnValues::Utf8(_) => None,
	}
}

fn non_numeric(name: &str) -> CensusError {
	CensusError::Table(TableError::SchemaMismatch {
		reason: format!("column '{}' is not numeric", name),
	})
}

/// Repeat the whole column `times` times, block after block.
fn tile(values: &ColumnValues, times: usize) -> ColumnValues {
	match values {
		ColumnValues::Float8(v) => {
			ColumnValues::Float8(v.iter().cycle().take(v.len() * times).cloned().collect())
		}
		ColumnValues::Int8(v) => {
			ColumnValues::Int8(v.iter().cycle().take(v.len() * times).cloned().collect())
		}
		ColumnValues::Utf8(v) => {
			ColumnValues::Utf8(v.iter().cycle().take(v.len() * times).cloned().collect())
		}
	}
}
