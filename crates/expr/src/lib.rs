// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Small expression language for timed evaluation.
//!
//! Expressions are parsed once into an [`Expr`] tree and evaluated any
//! number of times against an explicit [`Environment`]. The set of names
//! an expression may reference is part of the interface, never implicit
//! lexical capture:
//!
//! ```
//! use quickbench_expr::{Environment, Value, parse};
//!
//! let mut env = Environment::new();
//! env.bind("x", Value::Int(10));
//!
//! let expr = parse("x * 2 + 1").unwrap();
//! assert_eq!(expr.evaluate(&env).unwrap(), Value::Int(21));
//! ```

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use environment::Environment;
pub use eval::EvalError;
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use token::{Span, Token, TokenKind};
pub use value::Value;

mod ast;
mod environment;
mod eval;
mod lexer;
mod parser;
mod token;
mod value;

use thiserror::Error;

/// Combined error type for expression operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
	#[error("lex error: {0}")]
	Lex(#[from] LexError),

	#[error("parse error: {0}")]
	Parse(#[from] ParseError),

	#[error("evaluation error: {0}")]
	Eval(#[from] EvalError),
}

/// Parse a source string into a reusable expression tree.
pub fn parse(source: &str) -> Result<Expr, ExprError> {
	let tokens = Lexer::new(source).tokenize()?;
	let expr = Parser::new(tokens).parse()?;
	Ok(expr)
}
