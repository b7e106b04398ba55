// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Runtime value produced by expression evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Int(i64),
	Float(f64),
	Bool(bool),
	Str(String),
	List(Vec<Value>),
}

impl Value {
	/// Name of the variant, used in type mismatch messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Bool(_) => "bool",
			Value::Str(_) => "str",
			Value::List(_) => "list",
		}
	}

	/// Numeric view, promoting ints to floats.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Int(v) => Some(*v as f64),
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Int(_) | Value::Float(_))
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Int(v) => write!(f, "{}", v),
			Value::Float(v) => write!(f, "{}", v),
			Value::Bool(v) => write!(f, "{}", v),
			Value::Str(v) => write!(f, "{}", v),
			Value::List(items) => {
				write!(f, "[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}", item)?;
				}
				write!(f, "]")
			}
		}
	}
}
