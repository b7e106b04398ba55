// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Typed column storage. Each variant owns one growable sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValues {
	Float8(Vec<f64>),
	Int8(Vec<i64>),
	Utf8(Vec<String>),
}

impl ColumnValues {
	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		Self::Float8(values.into_iter().collect())
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		Self::Int8(values.into_iter().collect())
	}

	pub fn utf8(values: impl IntoIterator<Item = String>) -> Self {
		Self::Utf8(values.into_iter().collect())
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnValues::Float8(v) => v.len(),
			ColumnValues::Int8(v) => v.len(),
			ColumnValues::Utf8(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Name of the variant, used in schema mismatch messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			ColumnValues::Float8(_) => "float8",
			ColumnValues::Int8(_) => "int8",
			ColumnValues::Utf8(_) => "utf8",
		}
	}

	/// Render the value at `index` for display.
	pub fn as_string(&self, index: usize) -> String {
		match self {
			ColumnValues::Float8(v) => format!("{}", v[index]),
			ColumnValues::Int8(v) => format!("{}", v[index]),
			ColumnValues::Utf8(v) => v[index].clone(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnValues,
}

impl Column {
	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self {
			name: name.to_string(),
			data: ColumnValues::float8(values),
		}
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self {
			name: name.to_string(),
			data: ColumnValues::int8(values),
		}
	}

	pub fn utf8<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
		Self {
			name: name.to_string(),
			data: ColumnValues::utf8(values.into_iter().map(|s| s.to_string())),
		}
	}
}
