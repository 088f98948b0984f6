use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	// Byte offset of `ch`, or one past the last char once input is drained.
	position: u32,
	ch: Option<char>,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			ch: None,
			input,
		};

		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> Result<Option<Spanned>, LexicalError> {
		while let Some('\n' | ' ' | '\t' | '\x0C' | '\r') = self.ch {
			self.next_char();
		}

		let spanned = match self.ch {
			Some(ch) => match ch {
				'+' => self.eat_one_char(Token::Plus),
				'-' => self.eat_one_char(Token::Minus),
				'*' => self.eat_one_char(Token::Mult),
				'/' => self.eat_one_char(Token::Div),
				'=' => self.eat_one_char(Token::Assign),
				';' => self.eat_one_char(Token::Semicolon),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'a'..='z' | 'A'..='Z' => self.lex_name(),
				'0'..='9' => self.lex_number(),
				c => {
					let start = self.position;
					self.next_char();

					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedCharacter { ch: c },
						location: SrcSpan::from(start, self.position),
					});
				}
			},
			None => return Ok(None)
		};

		Ok(Some(spanned))
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		match self.input.next() {
			Some((pos, next)) => {
				self.position = pos;
				self.ch = Some(next);
			},
			None => {
				if let Some(ch) = ch {
					self.position += ch.len_utf8() as u32;
				}

				self.ch = None;
			}
		}

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	// <буква>{<буква>}
	fn lex_name(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut name = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_alphabetic() => {
					name.push(ch);
					self.next_char();
				},
				_ => break
			}
		}

		let end_pos = self.position;

		(start_pos, Token::Name(name), end_pos)
	}

	// <цифра>{<цифра>}
	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => {
					value.push(ch);
					self.next_char();
				},
				_ => break
			}
		}

		let end_pos = self.position;

		(start_pos, Token::Number(value), end_pos)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_token().transpose()
	}
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))).collect()
}
