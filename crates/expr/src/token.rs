// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Source span of a token, byte offsets plus line/column for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	pub start: usize,
	pub end: usize,
	pub line: u32,
	pub column: u32,
}

impl Span {
	pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
		Self {
			start,
			end,
			line,
			column,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
	pub text: String,
}

impl Token {
	pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
		Self {
			kind,
			span,
			text,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	// Literals
	Int(i64),
	Float(f64),
	String(String),
	Bool(bool),

	Ident,

	// Operators
	Plus,
	Minus,
	Star,
	Slash,
	Percent,
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
	And,
	Or,
	Not,

	// Delimiters
	LParen,
	RParen,
	Comma,

	Eof,
}

impl TokenKind {
	/// Map keyword text onto its token, if any.
	pub fn from_keyword(text: &str) -> Option<TokenKind> {
		match text {
			"true" => Some(TokenKind::Bool(true)),
			"false" => Some(TokenKind::Bool(false)),
			"and" => Some(TokenKind::And),
			"or" => Some(TokenKind::Or),
			"not" => Some(TokenKind::Not),
			_ => None,
		}
	}
}
