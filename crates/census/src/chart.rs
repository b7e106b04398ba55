// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quickbench_table::{ColumnValues, Table, TableError};
use unicode_width::UnicodeWidthStr;

use crate::{CensusError, Result, reshape::numeric};

/// Horizontal text bar chart of the top `top_n` rows by a value column.
#[derive(Debug, Clone)]
pub struct BarChart {
	pub title: String,
	/// Width of the longest bar, in glyphs.
	pub width: usize,
}

impl BarChart {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			width: 40,
		}
	}

	pub fn width(mut self, width: usize) -> Self {
		self.width = width;
		self
	}

	/// Render the chart: one `label |███ value` line per row, largest
	/// value first.
	pub fn render(
		&self,
		table: &Table,
		label_col: &str,
		value_col: &str,
		top_n: usize,
	) -> Result<String> {
		let labels = match &lookup(table, label_col)?.data {
			ColumnValues::Utf8(v) => v.clone(),
			other => {
				return Err(CensusError::Table(TableError::SchemaMismatch {
					reason: format!(
						"label column '{}' must be utf8, got {}",
						label_col,
						other.type_name()
					),
				}));
			}
		};
		let values = numeric(&lookup(table, value_col)?.data).ok_or_else(|| {
			CensusError::Table(TableError::SchemaMismatch {
				reason: format!("column '{}' is not numeric", value_col),
			})
		})?;

		let mut rows: Vec<(String, f64)> = labels.into_iter().zip(values).collect();
		rows.sort_by(|a, b| b.1.total_cmp(&a.1));
		rows.truncate(top_n);

		let scale = rows.first().map(|(_, v)| *v).unwrap_or(0.0);
		let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

		let mut out = String::new();
		out.push_str(&self.title);
		out.push('\n');
		out.push_str(&"-".repeat(self.title.width()));
		out.push('\n');

		for (label, value) in rows {
			let glyphs = if scale > 0.0 {
				((value / scale) * self.width as f64).round() as usize
			} else {
				0
			};
			let padding = " ".repeat(label_width - label.width());
			out.push_str(&format!(
				"{}{} |{} {}\n",
				label,
				padding,
				"█".repeat(glyphs),
				value
			));
		}

		Ok(out)
	}
}

fn lookup<'a>(table: &'a Table, name: &str) -> Result<&'a quickbench_table::Column> {
	table.column(name).ok_or_else(|| CensusError::MissingColumn {
		name: name.to_string(),
	})
}
