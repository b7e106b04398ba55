// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Parsed expression tree, reusable across evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
	/// Literal constant value
	Int(i64),
	Float(f64),
	Bool(bool),
	Str(String),

	/// Reference to an environment binding
	Name(String),

	/// Binary operation
	BinaryOp {
		op: BinaryOp,
		left: Box<Expr>,
		right: Box<Expr>,
	},

	/// Unary operation
	UnaryOp {
		op: UnaryOp,
		operand: Box<Expr>,
	},

	/// Builtin function call
	Call {
		name: String,
		arguments: Vec<Expr>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	// Arithmetic
	Add,
	Sub,
	Mul,
	Div,
	Rem,

	// Comparison
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,

	// Logical
	And,
	Or,
}

impl std::fmt::Display for BinaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BinaryOp::Add => write!(f, "+"),
			BinaryOp::Sub => write!(f, "-"),
			BinaryOp::Mul => write!(f, "*"),
			BinaryOp::Div => write!(f, "/"),
			BinaryOp::Rem => write!(f, "%"),
			BinaryOp::Eq => write!(f, "=="),
			BinaryOp::Ne => write!(f, "!="),
			BinaryOp::Lt => write!(f, "<"),
			BinaryOp::Le => write!(f, "<="),
			BinaryOp::Gt => write!(f, ">"),
			BinaryOp::Ge => write!(f, ">="),
			BinaryOp::And => write!(f, "and"),
			BinaryOp::Or => write!(f, "or"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
	Neg,
	Not,
}

impl std::fmt::Display for UnaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UnaryOp::Neg => write!(f, "-"),
			UnaryOp::Not => write!(f, "not"),
		}
	}
}
