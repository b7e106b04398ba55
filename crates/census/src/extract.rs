// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io::Read, path::Path};

use quickbench_table::{Column, ColumnValues, Table};
use regex::Regex;
use tracing::debug;

use crate::{CensusError, Result};

/// Load a headered CSV file into a [`Table`].
///
/// Column types are inferred per column: all-integer cells become `Int8`,
/// otherwise all-numeric cells become `Float8`, anything else stays `Utf8`.
pub fn load_csv(path: &Path) -> Result<Table> {
	let reader = csv::ReaderBuilder::new()
		.has_headers(true)
		.trim(csv::Trim::All)
		.from_path(path)
		.map_err(from_csv)?;
	let table = read_table(reader)?;
	debug!(
		path = %path.display(),
		columns = table.column_count(),
		rows = table.row_count().unwrap_or(0),
		"loaded census csv"
	);
	Ok(table)
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table> {
	let headers: Vec<String> = reader.headers().map_err(from_csv)?.iter().map(String::from).collect();

	let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
	for record in reader.records() {
		let record = record.map_err(from_csv)?;
		if record.len() != headers.len() {
			let line = record.position().map(|p| p.line()).unwrap_or(0);
			return Err(CensusError::Parse {
				line,
			});
		}
		for (column, field) in cells.iter_mut().zip(record.iter()) {
			column.push(field.to_string());
		}
	}

	let columns = headers
		.into_iter()
		.zip(cells)
		.map(|(name, values)| Column {
			name,
			data: infer_values(values),
		})
		.collect();

	Ok(Table::new(columns))
}

/// Pick the narrowest type every cell of the column fits.
fn infer_values(values: Vec<String>) -> ColumnValues {
	if !values.is_empty() && values.iter().all(|v| v.parse::<i64>().is_ok()) {
		return ColumnValues::int8(values.iter().map(|v| v.parse().unwrap_or(0)));
	}
	if !values.is_empty() && values.iter().all(|v| v.parse::<f64>().is_ok()) {
		return ColumnValues::float8(values.iter().map(|v| v.parse().unwrap_or(0.0)));
	}
	ColumnValues::Utf8(values)
}

/// Project the columns whose name matches `pattern`, keeping table order.
///
/// Mirror of a by-name regex filter: the geography key columns stay in the
/// projection by including them in the pattern (`"Geog|Hispanic"`).
pub fn select(table: &Table, pattern: &str) -> Result<Table> {
	let matcher = Regex::new(pattern)?;
	let columns: Vec<Column> =
		table.columns.iter().filter(|c| matcher.is_match(&c.name)).cloned().collect();
	Ok(Table::new(columns))
}

fn from_csv(err: csv::Error) -> CensusError {
	let line = err.position().map(|p| p.line()).unwrap_or(0);
	match err.into_kind() {
		csv::ErrorKind::Io(io) => CensusError::Io(io),
		_ => CensusError::Parse {
			line,
		},
	}
}
