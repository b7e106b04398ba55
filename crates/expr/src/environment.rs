// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use crate::Value;

/// Explicit evaluation environment: the set of names an expression may
/// reference. Bindings keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
	bindings: IndexMap<String, Value>,
}

impl Environment {
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind `name` to `value`, replacing any previous binding.
	pub fn bind(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
		self.bindings.insert(name.into(), value);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.bindings.get(name)
	}

	/// Bound names, in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.bindings.keys().map(|k| k.as_str())
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bind_and_get() {
		let mut env = Environment::new();
		env.bind("x", Value::Int(1)).bind("y", Value::Float(2.5));

		assert_eq!(env.get("x"), Some(&Value::Int(1)));
		assert_eq!(env.get("missing"), None);
		assert_eq!(env.names().collect::<Vec<_>>(), vec!["x", "y"]);
	}

	#[test]
	fn test_rebind_replaces() {
		let mut env = Environment::new();
		env.bind("x", Value::Int(1));
		env.bind("x", Value::Int(2));

		assert_eq!(env.get("x"), Some(&Value::Int(2)));
		assert_eq!(env.len(), 1);
	}
}
