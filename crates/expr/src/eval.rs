// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::{
	ast::{BinaryOp, Expr, UnaryOp},
	environment::Environment,
	value::Value,
};

/// Evaluation error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
	#[error("unknown name '{name}'")]
	UnknownName {
		name: String,
	},

	#[error("unknown function '{name}'")]
	UnknownFunction {
		name: String,
	},

	#[error("operator '{op}' not defined for {left} and {right}")]
	BinaryTypeMismatch {
		op: String,
		left: &'static str,
		right: &'static str,
	},

	#[error("operator '{op}' not defined for {operand}")]
	UnaryTypeMismatch {
		op: String,
		operand: &'static str,
	},

	#[error("division by zero")]
	DivisionByZero,

	#[error("function '{name}' expects {expected} arguments, got {actual}")]
	BadArity {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("function '{name}' not defined for {argument}")]
	BadArgument {
		name: String,
		argument: &'static str,
	},
}

type Result<T> = std::result::Result<T, EvalError>;

impl Expr {
	/// Evaluate against an explicit environment.
	pub fn evaluate(&self, env: &Environment) -> Result<Value> {
		match self {
			Expr::Int(v) => Ok(Value::Int(*v)),
			Expr::Float(v) => Ok(Value::Float(*v)),
			Expr::Bool(v) => Ok(Value::Bool(*v)),
			Expr::Str(v) => Ok(Value::Str(v.clone())),

			Expr::Name(name) => env.get(name).cloned().ok_or_else(|| EvalError::UnknownName {
				name: name.clone(),
			}),

			Expr::UnaryOp {
				op,
				operand,
			} => {
				let value = operand.evaluate(env)?;
				evaluate_unary(*op, value)
			}

			Expr::BinaryOp {
				op,
				left,
				right,
			} => match op {
				// short-circuit before evaluating the right side
				BinaryOp::And | BinaryOp::Or => {
					let lhs = left.evaluate(env)?;
					let Value::Bool(l) = lhs else {
						return Err(EvalError::BinaryTypeMismatch {
							op: op.to_string(),
							left: lhs.type_name(),
							right: "_",
						});
					};
					if (*op == BinaryOp::And && !l) || (*op == BinaryOp::Or && l) {
						return Ok(Value::Bool(l));
					}
					let rhs = right.evaluate(env)?;
					let Value::Bool(r) = rhs else {
						return Err(EvalError::BinaryTypeMismatch {
							op: op.to_string(),
							left: "bool",
							right: rhs.type_name(),
						});
					};
					Ok(Value::Bool(r))
				}
				_ => {
					let lhs = left.evaluate(env)?;
					let rhs = right.evaluate(env)?;
					evaluate_binary(*op, lhs, rhs)
				}
			},

			Expr::Call {
				name,
				arguments,
			} => {
				let mut values = Vec::with_capacity(arguments.len());
				for argument in arguments {
					values.push(argument.evaluate(env)?);
				}
				evaluate_call(name, values)
			}
		}
	}
}

fn evaluate_unary(op: UnaryOp, value: Value) -> Result<Value> {
	match (op, value) {
		(UnaryOp::Neg, Value::Int(v)) => Ok(Value::Int(-v)),
		(UnaryOp::Neg, Value::Float(v)) => Ok(Value::Float(-v)),
		(UnaryOp::Not, Value::Bool(v)) => Ok(Value::Bool(!v)),
		(op, value) => Err(EvalError::UnaryTypeMismatch {
			op: op.to_string(),
			operand: value.type_name(),
		}),
	}
}

fn evaluate_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
	use BinaryOp::*;

	match op {
		Add | Sub | Mul | Div | Rem => evaluate_arithmetic(op, lhs, rhs),
		Lt | Le | Gt | Ge => evaluate_ordering(op, lhs, rhs),
		Eq => Ok(Value::Bool(values_equal(&lhs, &rhs))),
		Ne => Ok(Value::Bool(!values_equal(&lhs, &rhs))),
		And | Or => unreachable!("logical operators are short-circuited by the caller"),
	}
}

fn evaluate_arithmetic(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
	use BinaryOp::*;

	// string concatenation rides on Add
	if let (Add, Value::Str(l), Value::Str(r)) = (op, &lhs, &rhs) {
		return Ok(Value::Str(format!("{}{}", l, r)));
	}

	match (&lhs, &rhs) {
		(Value::Int(l), Value::Int(r)) => match op {
			Add => Ok(Value::Int(l.wrapping_add(*r))),
			Sub => Ok(Value::Int(l.wrapping_sub(*r))),
			Mul => Ok(Value::Int(l.wrapping_mul(*r))),
			Div => {
				if *r == 0 {
					Err(EvalError::DivisionByZero)
				} else {
					Ok(Value::Int(l / r))
				}
			}
			Rem => {
				if *r == 0 {
					Err(EvalError::DivisionByZero)
				} else {
					Ok(Value::Int(l % r))
				}
			}
			_ => unreachable!(),
		},
		_ => {
			let (Some(l), Some(r)) = (lhs.as_float(), rhs.as_float()) else {
				return Err(EvalError::BinaryTypeMismatch {
					op: op.to_string(),
					left: lhs.type_name(),
					right: rhs.type_name(),
				});
			};
			match op {
				Add => Ok(Value::Float(l + r)),
				Sub => Ok(Value::Float(l - r)),
				Mul => Ok(Value::Float(l * r)),
				Div => {
					if r == 0.0 {
						Err(EvalError::DivisionByZero)
					} else {
						Ok(Value::Float(l / r))
					}
				}
				Rem => {
					if r == 0.0 {
						Err(EvalError::DivisionByZero)
					} else {
						Ok(Value::Float(l % r))
					}
				}
				_ => unreachable!(),
			}
		}
	}
}

fn evaluate_ordering(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
	use BinaryOp::*;

	let result = match (&lhs, &rhs) {
		(Value::Str(l), Value::Str(r)) => match op {
			Lt => l < r,
			Le => l <= r,
			Gt => l > r,
			Ge => l >= r,
			_ => unreachable!(),
		},
		_ => {
			let (Some(l), Some(r)) = (lhs.as_float(), rhs.as_float()) else {
				return Err(EvalError::BinaryTypeMismatch {
					op: op.to_string(),
					left: lhs.type_name(),
					right: rhs.type_name(),
				});
			};
			match op {
				Lt => l < r,
				Le => l <= r,
				Gt => l > r,
				Ge => l >= r,
				_ => unreachable!(),
			}
		}
	};

	Ok(Value::Bool(result))
}

fn values_equal(lhs: &Value, rhs: &Value) -> bool {
	if lhs.is_numeric() && rhs.is_numeric() {
		// 1 == 1.0
		lhs.as_float() == rhs.as_float()
	} else {
		lhs == rhs
	}
}

fn evaluate_call(name: &str, mut arguments: Vec<Value>) -> Result<Value> {
	let arity = |expected: usize| -> Result<()> {
		if arguments.len() == expected {
			Ok(())
		} else {
			Err(EvalError::BadArity {
				name: name.to_string(),
				expected,
				actual: arguments.len(),
			})
		}
	};

	match name {
		"abs" => {
			arity(1)?;
			match arguments.remove(0) {
				Value::Int(v) => Ok(Value::Int(v.abs())),
				Value::Float(v) => Ok(Value::Float(v.abs())),
				other => Err(EvalError::BadArgument {
					name: name.to_string(),
					argument: other.type_name(),
				}),
			}
		}

		"sqrt" => {
			arity(1)?;
			let value = arguments.remove(0);
			let Some(v) = value.as_float() else {
				return Err(EvalError::BadArgument {
					name: name.to_string(),
					argument: value.type_name(),
				});
			};
			Ok(Value::Float(v.sqrt()))
		}

		"len" => {
			arity(1)?;
			match arguments.remove(0) {
				Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
				Value::List(items) => Ok(Value::Int(items.len() as i64)),
				other => Err(EvalError::BadArgument {
					name: name.to_string(),
					argument: other.type_name(),
				}),
			}
		}

		"range" => {
			arity(2)?;
			let (start, end) = match (&arguments[0], &arguments[1]) {
				(Value::Int(s), Value::Int(e)) => (*s, *e),
				_ => {
					return Err(EvalError::BadArgument {
						name: name.to_string(),
						argument: arguments[0].type_name(),
					});
				}
			};
			Ok(Value::List((start..end).map(Value::Int).collect()))
		}

		"sum" => {
			arity(1)?;
			fold_list(name, arguments.remove(0), |values| {
				if values.iter().all(|v| matches!(v, Value::Int(_))) {
					let total = values
						.iter()
						.map(|v| match v {
							Value::Int(i) => *i,
							_ => unreachable!(),
						})
						.sum();
					Some(Value::Int(total))
				} else {
					let total: Option<f64> =
						values.iter().map(|v| v.as_float()).sum();
					total.map(Value::Float)
				}
			})
		}

		"min" | "max" => {
			let values = if arguments.len() == 1 {
				match arguments.remove(0) {
					Value::List(items) => items,
					other => vec![other],
				}
			} else {
				arguments
			};
			if values.is_empty() {
				return Err(EvalError::BadArity {
					name: name.to_string(),
					expected: 1,
					actual: 0,
				});
			}
			let mut floats = Vec::with_capacity(values.len());
			for value in &values {
				let Some(v) = value.as_float() else {
					return Err(EvalError::BadArgument {
						name: name.to_string(),
						argument: value.type_name(),
					});
				};
				floats.push(v);
			}
			let (mut best, mut best_index) = (floats[0], 0);
			for (i, &v) in floats.iter().enumerate().skip(1) {
				let better = if name == "min" { v < best } else { v > best };
				if better {
					best = v;
					best_index = i;
				}
			}
			Ok(values[best_index].clone())
		}

		_ => Err(EvalError::UnknownFunction {
			name: name.to_string(),
		}),
	}
}

fn fold_list(
	name: &str,
	value: Value,
	fold: impl FnOnce(&[Value]) -> Option<Value>,
) -> Result<Value> {
	match value {
		Value::List(items) => fold(&items).ok_or_else(|| EvalError::BadArgument {
			name: name.to_string(),
			argument: "list",
		}),
		other => Err(EvalError::BadArgument {
			name: name.to_string(),
			argument: other.type_name(),
		}),
	}
}
