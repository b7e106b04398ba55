// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::{
	ast::{BinaryOp, Expr, UnaryOp},
	token::{Token, TokenKind},
};

/// Parser error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
	#[error("unexpected token '{text}' at {line}:{column}")]
	UnexpectedToken {
		text: String,
		line: u32,
		column: u32,
	},

	#[error("unexpected end of expression")]
	UnexpectedEof,

	#[error("trailing input '{text}' at {line}:{column}")]
	TrailingInput {
		text: String,
		line: u32,
		column: u32,
	},
}

/// Pratt parser over a token stream.
pub struct Parser {
	tokens: Vec<Token>,
	position: usize,
}

impl Parser {
	pub fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			position: 0,
		}
	}

	/// Parse a single expression; the whole input must be consumed.
	pub fn parse(mut self) -> Result<Expr, ParseError> {
		let expr = self.parse_expr(0)?;
		let token = self.peek();
		if token.kind != TokenKind::Eof {
			return Err(ParseError::TrailingInput {
				text: token.text.clone(),
				line: token.span.line,
				column: token.span.column,
			});
		}
		Ok(expr)
	}

	fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
		let mut left = self.parse_prefix()?;

		while let Some(op) = binary_op(&self.peek().kind) {
			let precedence = op_precedence(op);
			if precedence < min_precedence {
				break;
			}
			self.advance();
			// left-associative: right side binds one level tighter
			let right = self.parse_expr(precedence + 1)?;
			left = Expr::BinaryOp {
				op,
				left: Box::new(left),
				right: Box::new(right),
			};
		}

		Ok(left)
	}

	fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
		let token = self.advance().clone();

		match token.kind {
			TokenKind::Int(value) => Ok(Expr::Int(value)),
			TokenKind::Float(value) => Ok(Expr::Float(value)),
			TokenKind::Bool(value) => Ok(Expr::Bool(value)),
			TokenKind::String(value) => Ok(Expr::Str(value)),

			TokenKind::Minus => {
				let operand = self.parse_expr(UNARY_PRECEDENCE)?;
				Ok(Expr::UnaryOp {
					op: UnaryOp::Neg,
					operand: Box::new(operand),
				})
			}

			TokenKind::Not => {
				let operand = self.parse_expr(UNARY_PRECEDENCE)?;
				Ok(Expr::UnaryOp {
					op: UnaryOp::Not,
					operand: Box::new(operand),
				})
			}

			TokenKind::LParen => {
				let inner = self.parse_expr(0)?;
				self.expect(TokenKind::RParen)?;
				Ok(inner)
			}

			TokenKind::Ident => {
				if self.peek().kind == TokenKind::LParen {
					self.advance();
					let arguments = self.parse_arguments()?;
					Ok(Expr::Call {
						name: token.text,
						arguments,
					})
				} else {
					Ok(Expr::Name(token.text))
				}
			}

			TokenKind::Eof => Err(ParseError::UnexpectedEof),

			_ => Err(ParseError::UnexpectedToken {
				text: token.text,
				line: token.span.line,
				column: token.span.column,
			}),
		}
	}

	fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
		let mut arguments = Vec::new();

		if self.peek().kind == TokenKind::RParen {
			self.advance();
			return Ok(arguments);
		}

		loop {
			arguments.push(self.parse_expr(0)?);
			match self.peek().kind {
				TokenKind::Comma => {
					self.advance();
				}
				TokenKind::RParen => {
					self.advance();
					break;
				}
				_ => {
					let token = self.peek();
					return Err(ParseError::UnexpectedToken {
						text: token.text.clone(),
						line: token.span.line,
						column: token.span.column,
					});
				}
			}
		}

		Ok(arguments)
	}

	fn peek(&self) -> &Token {
		// tokenize always terminates the stream with Eof
		&self.tokens[self.position.min(self.tokens.len() - 1)]
	}

	fn advance(&mut self) -> &Token {
		let token = &self.tokens[self.position.min(self.tokens.len() - 1)];
		if self.position < self.tokens.len() - 1 {
			self.position += 1;
		}
		token
	}

	fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
		let token = self.peek();
		if token.kind == kind {
			self.advance();
			Ok(())
		} else if token.kind == TokenKind::Eof {
			Err(ParseError::UnexpectedEof)
		} else {
			Err(ParseError::UnexpectedToken {
				text: token.text.clone(),
				line: token.span.line,
				column: token.span.column,
			})
		}
	}
}

const UNARY_PRECEDENCE: u8 = 7;

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
	match kind {
		TokenKind::Or => Some(BinaryOp::Or),
		TokenKind::And => Some(BinaryOp::And),
		TokenKind::Eq => Some(BinaryOp::Eq),
		TokenKind::Ne => Some(BinaryOp::Ne),
		TokenKind::Lt => Some(BinaryOp::Lt),
		TokenKind::Le => Some(BinaryOp::Le),
		TokenKind::Gt => Some(BinaryOp::Gt),
		TokenKind::Ge => Some(BinaryOp::Ge),
		TokenKind::Plus => Some(BinaryOp::Add),
		TokenKind::Minus => Some(BinaryOp::Sub),
		TokenKind::Star => Some(BinaryOp::Mul),
		TokenKind::Slash => Some(BinaryOp::Div),
		TokenKind::Percent => Some(BinaryOp::Rem),
		_ => None,
	}
}

fn op_precedence(op: BinaryOp) -> u8 {
	match op {
		BinaryOp::Or => 1,
		BinaryOp::And => 2,
		BinaryOp::Eq | BinaryOp::Ne => 3,
		BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 4,
		BinaryOp::Add | BinaryOp::Sub => 5,
		BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 6,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::Lexer;

	fn parse(source: &str) -> Result<Expr, ParseError> {
		Parser::new(Lexer::new(source).tokenize().unwrap()).parse()
	}

	#[test]
	fn test_parse_precedence() {
		let expr = parse("1 + 2 * 3").unwrap();
		assert_eq!(
			expr,
			Expr::BinaryOp {
				op: BinaryOp::Add,
				left: Box::new(Expr::Int(1)),
				right: Box::new(Expr::BinaryOp {
					op: BinaryOp::Mul,
					left: Box::new(Expr::Int(2)),
					right: Box::new(Expr::Int(3)),
				}),
			}
		);
	}

	#[test]
	fn test_parse_left_associative() {
		let expr = parse("10 - 2 - 3").unwrap();
		assert_eq!(
			expr,
			Expr::BinaryOp {
				op: BinaryOp::Sub,
				left: Box::new(Expr::BinaryOp {
					op: BinaryOp::Sub,
					left: Box::new(Expr::Int(10)),
					right: Box::new(Expr::Int(2)),
				}),
				right: Box::new(Expr::Int(3)),
			}
		);
	}

	#[test]
	fn test_parse_parens_override() {
		let expr = parse("(1 + 2) * 3").unwrap();
		assert_eq!(
			expr,
			Expr::BinaryOp {
				op: BinaryOp::Mul,
				left: Box::new(Expr::BinaryOp {
					op: BinaryOp::Add,
					left: Box::new(Expr::Int(1)),
					right: Box::new(Expr::Int(2)),
				}),
				right: Box::new(Expr::Int(3)),
			}
		);
	}

	#[test]
	fn test_parse_unary_minus() {
		let expr = parse("-x + 1").unwrap();
		assert_eq!(
			expr,
			Expr::BinaryOp {
				op: BinaryOp::Add,
				left: Box::new(Expr::UnaryOp {
					op: UnaryOp::Neg,
					operand: Box::new(Expr::Name("x".to_string())),
				}),
				right: Box::new(Expr::Int(1)),
			}
		);
	}

	#[test]
	fn test_parse_call() {
		let expr = parse("min(1, x)").unwrap();
		assert_eq!(
			expr,
			Expr::Call {
				name: "min".to_string(),
				arguments: vec![Expr::Int(1), Expr::Name("x".to_string())],
			}
		);
	}

	#[test]
	fn test_parse_nested_call() {
		let expr = parse("sum(range(0, 10))").unwrap();
		assert_eq!(
			expr,
			Expr::Call {
				name: "sum".to_string(),
				arguments: vec![Expr::Call {
					name: "range".to_string(),
					arguments: vec![Expr::Int(0), Expr::Int(10)],
				}],
			}
		);
	}

	#[test]
	fn test_parse_comparison_and_logic() {
		let expr = parse("x > 1 and y <= 2").unwrap();
		assert!(matches!(expr, Expr::BinaryOp { op: BinaryOp::And, .. }));
	}

	#[test]
	fn test_parse_error_trailing_input() {
		assert!(matches!(parse("1 + 2 3"), Err(ParseError::TrailingInput { .. })));
	}

	#[test]
	fn test_parse_error_empty() {
		assert_eq!(parse(""), Err(ParseError::UnexpectedEof));
	}

	#[test]
	fn test_parse_error_unclosed_paren() {
		assert_eq!(parse("(1 + 2"), Err(ParseError::UnexpectedEof));
	}
}
