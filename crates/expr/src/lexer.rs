// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::Peekable, str::CharIndices};

use thiserror::Error;

use crate::token::{Span, Token, TokenKind};

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
	#[error("unexpected character '{ch}' at {line}:{column}")]
	UnexpectedChar {
		ch: char,
		line: u32,
		column: u32,
	},

	#[error("unterminated string at {line}:{column}")]
	UnterminatedString {
		line: u32,
		column: u32,
	},

	#[error("invalid number '{text}' at {line}:{column}")]
	InvalidNumber {
		text: String,
		line: u32,
		column: u32,
	},
}

/// Lexer for benchmark expressions.
pub struct Lexer<'a> {
	source: &'a str,
	chars: Peekable<CharIndices<'a>>,
	position: usize,
	line: u32,
	column: u32,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			chars: source.char_indices().peekable(),
			position: 0,
			line: 1,
			column: 1,
		}
	}

	/// Tokenize the entire source into a vector of tokens.
	pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
		let mut tokens = Vec::new();

		loop {
			let token = self.next_token()?;
			let is_eof = token.kind == TokenKind::Eof;
			tokens.push(token);

			if is_eof {
				break;
			}
		}

		Ok(tokens)
	}

	fn next_token(&mut self) -> Result<Token, LexError> {
		self.skip_whitespace();

		let Some(&(pos, ch)) = self.chars.peek() else {
			return Ok(self.make_token(TokenKind::Eof, self.position, self.column));
		};

		let start = pos;
		let start_column = self.column;

		match ch {
			'a'..='z' | 'A'..='Z' | '_' => self.scan_identifier(),

			'0'..='9' => self.scan_number(),

			'"' | '\'' => self.scan_string(ch),

			'=' => {
				self.advance();
				if self.match_char('=') {
					Ok(self.make_token(TokenKind::Eq, start, start_column))
				} else {
					Err(LexError::UnexpectedChar {
						ch: '=',
						line: self.line,
						column: start_column,
					})
				}
			}

			'!' => {
				self.advance();
				if self.match_char('=') {
					Ok(self.make_token(TokenKind::Ne, start, start_column))
				} else {
					Ok(self.make_token(TokenKind::Not, start, start_column))
				}
			}

			'<' => {
				self.advance();
				if self.match_char('=') {
					Ok(self.make_token(TokenKind::Le, start, start_column))
				} else {
					Ok(self.make_token(TokenKind::Lt, start, start_column))
				}
			}

			'>' => {
				self.advance();
				if self.match_char('=') {
					Ok(self.make_token(TokenKind::Ge, start, start_column))
				} else {
					Ok(self.make_token(TokenKind::Gt, start, start_column))
				}
			}

			'&' => {
				self.advance();
				if self.match_char('&') {
					Ok(self.make_token(TokenKind::And, start, start_column))
				} else {
					Err(LexError::UnexpectedChar {
						ch: '&',
						line: self.line,
						column: start_column,
					})
				}
			}

			'|' => {
				self.advance();
				if self.match_char('|') {
					Ok(self.make_token(TokenKind::Or, start, start_column))
				} else {
					Err(LexError::UnexpectedChar {
						ch: '|',
						line: self.line,
						column: start_column,
					})
				}
			}

			'+' => {
				self.advance();
				Ok(self.make_token(TokenKind::Plus, start, start_column))
			}

			'-' => {
				self.advance();
				Ok(self.make_token(TokenKind::Minus, start, start_column))
			}

			'*' => {
				self.advance();
				Ok(self.make_token(TokenKind::Star, start, start_column))
			}

			'/' => {
				self.advance();
				Ok(self.make_token(TokenKind::Slash, start, start_column))
			}

			'%' => {
				self.advance();
				Ok(self.make_token(TokenKind::Percent, start, start_column))
			}

			'(' => {
				self.advance();
				Ok(self.make_token(TokenKind::LParen, start, start_column))
			}

			')' => {
				self.advance();
				Ok(self.make_token(TokenKind::RParen, start, start_column))
			}

			',' => {
				self.advance();
				Ok(self.make_token(TokenKind::Comma, start, start_column))
			}

			_ => Err(LexError::UnexpectedChar {
				ch,
				line: self.line,
				column: self.column,
			}),
		}
	}

	fn skip_whitespace(&mut self) {
		while let Some(&(_, ch)) = self.chars.peek() {
			match ch {
				' ' | '\t' | '\r' => {
					self.advance();
				}
				'\n' => {
					self.advance();
					self.line += 1;
					self.column = 1;
				}
				_ => break,
			}
		}
	}

	fn scan_identifier(&mut self) -> Result<Token, LexError> {
		let start = self.position;
		let start_column = self.column;

		while let Some(&(_, ch)) = self.chars.peek() {
			if ch.is_alphanumeric() || ch == '_' {
				self.advance();
			} else {
				break;
			}
		}

		let text = &self.source[start..self.position];
		let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Ident);

		Ok(Token::new(
			kind,
			Span::new(start, self.position, self.line, start_column),
			text.to_string(),
		))
	}

	fn scan_number(&mut self) -> Result<Token, LexError> {
		let start = self.position;
		let start_column = self.column;

		while let Some(&(_, ch)) = self.chars.peek() {
			if ch.is_ascii_digit() {
				self.advance();
			} else {
				break;
			}
		}

		// Fractional part only when a digit follows the dot
		let mut is_float = false;
		if let Some(&(_, '.')) = self.chars.peek() {
			let rest = &self.source[self.position + 1..];
			if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
				is_float = true;
				self.advance();
				while let Some(&(_, ch)) = self.chars.peek() {
					if ch.is_ascii_digit() {
						self.advance();
					} else {
						break;
					}
				}
			}
		}

		let text = self.source[start..self.position].to_string();

		let kind = if is_float {
			let value: f64 = text.parse().map_err(|_| LexError::InvalidNumber {
				text: text.clone(),
				line: self.line,
				column: start_column,
			})?;
			TokenKind::Float(value)
		} else {
			let value: i64 = text.parse().map_err(|_| LexError::InvalidNumber {
				text: text.clone(),
				line: self.line,
				column: start_column,
			})?;
			TokenKind::Int(value)
		};

		Ok(Token::new(kind, Span::new(start, self.position, self.line, start_column), text))
	}

	fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
		let start = self.position;
		let start_column = self.column;
		let start_line = self.line;

		self.advance(); // consume opening quote

		let mut value = String::new();

		loop {
			match self.chars.peek() {
				None => {
					return Err(LexError::UnterminatedString {
						line: start_line,
						column: start_column,
					});
				}
				Some(&(_, ch)) if ch == quote => {
					self.advance();
					break;
				}
				Some(&(_, '\\')) => {
					self.advance();
					match self.chars.peek() {
						Some(&(_, 'n')) => {
							value.push('\n');
							self.advance();
						}
						Some(&(_, 't')) => {
							value.push('\t');
							self.advance();
						}
						Some(&(_, '\\')) => {
							value.push('\\');
							self.advance();
						}
						Some(&(_, c)) if c == quote => {
							value.push(c);
							self.advance();
						}
						_ => {
							value.push('\\');
						}
					}
				}
				Some(&(_, '\n')) => {
					return Err(LexError::UnterminatedString {
						line: start_line,
						column: start_column,
					});
				}
				Some(&(_, ch)) => {
					value.push(ch);
					self.advance();
				}
			}
		}

		let text = &self.source[start..self.position];

		Ok(Token::new(
			TokenKind::String(value),
			Span::new(start, self.position, self.line, start_column),
			text.to_string(),
		))
	}

	fn advance(&mut self) -> Option<char> {
		if let Some((pos, ch)) = self.chars.next() {
			self.position = pos + ch.len_utf8();
			self.column += 1;
			Some(ch)
		} else {
			None
		}
	}

	fn match_char(&mut self, expected: char) -> bool {
		if let Some(&(_, ch)) = self.chars.peek() {
			if ch == expected {
				self.advance();
				return true;
			}
		}
		false
	}

	fn make_token(&self, kind: TokenKind, start: usize, start_column: u32) -> Token {
		Token::new(
			kind,
			Span::new(start, self.position, self.line, start_column),
			self.source.get(start..self.position).unwrap_or("").to_string(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lex_arithmetic() {
		let tokens = Lexer::new("1 + 2 * x").tokenize().unwrap();
		assert_eq!(tokens[0].kind, TokenKind::Int(1));
		assert_eq!(tokens[1].kind, TokenKind::Plus);
		assert_eq!(tokens[2].kind, TokenKind::Int(2));
		assert_eq!(tokens[3].kind, TokenKind::Star);
		assert_eq!(tokens[4].kind, TokenKind::Ident);
		assert_eq!(tokens[4].text, "x");
		assert_eq!(tokens[5].kind, TokenKind::Eof);
	}

	#[test]
	fn test_lex_float() {
		let tokens = Lexer::new("3.14").tokenize().unwrap();
		assert!(matches!(tokens[0].kind, TokenKind::Float(f) if (f - 3.14).abs() < 1e-9));
	}

	#[test]
	fn test_lex_call() {
		let tokens = Lexer::new("sum(range(0, 10))").tokenize().unwrap();
		assert_eq!(tokens[0].kind, TokenKind::Ident);
		assert_eq!(tokens[0].text, "sum");
		assert_eq!(tokens[1].kind, TokenKind::LParen);
		assert_eq!(tokens[2].text, "range");
		assert_eq!(tokens[4].kind, TokenKind::Int(0));
		assert_eq!(tokens[5].kind, TokenKind::Comma);
	}

	#[test]
	fn test_lex_keywords() {
		let tokens = Lexer::new("true and not false").tokenize().unwrap();
		assert_eq!(tokens[0].kind, TokenKind::Bool(true));
		assert_eq!(tokens[1].kind, TokenKind::And);
		assert_eq!(tokens[2].kind, TokenKind::Not);
		assert_eq!(tokens[3].kind, TokenKind::Bool(false));
	}

	#[test]
	fn test_lex_string_literals() {
		let tokens = Lexer::new(r#"name == "Austin""#).tokenize().unwrap();
		assert!(matches!(&tokens[2].kind, TokenKind::String(s) if s == "Austin"));
	}

	#[test]
	fn test_lex_error_unterminated_string() {
		let result = Lexer::new(r#""unclosed"#).tokenize();
		assert!(matches!(result, Err(LexError::UnterminatedString { .. })));
	}

	#[test]
	fn test_lex_error_unexpected_char() {
		let result = Lexer::new("1 ? 2").tokenize();
		assert!(matches!(result, Err(LexError::UnexpectedChar { ch: '?', .. })));
	}
}
