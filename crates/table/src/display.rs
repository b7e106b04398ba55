// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use crate::Table;

fn display_width(s: &str) -> usize {
	s.width()
}

fn center(s: &str, width: usize) -> String {
	let pad = width.saturating_sub(display_width(s));
	let left = pad / 2;
	let right = pad - left;
	format!(" {:left$}{}{:right$} ", "", s, "", left = left, right = right)
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.columns.first().map_or(0, |c| c.data.len());

		let mut widths: Vec<usize> =
			self.columns.iter().map(|c| display_width(&c.name)).collect();

		for row in 0..row_count {
			for (i, col) in self.columns.iter().enumerate() {
				widths[i] = widths[i].max(display_width(&col.data.as_string(row)));
			}
		}

		for w in &mut widths {
			*w += 2;
		}

		let sep = format!(
			"+{}+",
			widths.iter().map(|w| "-".repeat(*w + 2)).collect::<Vec<_>>().join("+")
		);
		writeln!(f, "{}", sep)?;

		let header = self
			.columns
			.iter()
			.zip(&widths)
			.map(|(col, &w)| center(&col.name, w))
			.collect::<Vec<_>>();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row in 0..row_count {
			let cells = self
				.columns
				.iter()
				.zip(&widths)
				.map(|(col, &w)| center(&col.data.as_string(row), w))
				.collect::<Vec<_>>();
			writeln!(f, "|{}|", cells.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}

#[cfg(test)]
mod tests {
	use crate::{Column, Table};

	#[test]
	fn test_single_column() {
		let table = Table::new(vec![Column::utf8("expr", ["1+1", "2*2"])]);
		let output = format!("{}", table);
		let expected = "\
+--------+
|  expr  |
+--------+
|  1+1   |
|  2*2   |
+--------+
";
		assert_eq!(output, expected);
	}

	#[test]
	fn test_header_wider_than_values() {
		let table = Table::new(vec![Column::int8("neval", [3])]);
		let output = format!("{}", table);
		let expected = "\
+---------+
|  neval  |
+---------+
|    3    |
+---------+
";
		assert_eq!(output, expected);
	}

	#[test]
	fn test_multiple_columns_keep_order() {
		let table = Table::new(vec![
			Column::utf8("expr", ["1+1"]),
			Column::float8("median", [0.25]),
			Column::int8("neval", [10]),
		]);
		let output = format!("{}", table);
		let lines: Vec<&str> = output.lines().collect();
		assert!(lines[1].find("expr").unwrap() < lines[1].find("median").unwrap());
		assert!(lines[1].find("median").unwrap() < lines[1].find("neval").unwrap());
		assert!(lines[3].contains("0.25"));
	}
}
