//! Line reading and tokenizing.
//!
//! Operator characters (`<`, `>`, `|`, `&`) always form single-character
//! tokens, so `cat<in|wc` reads the same as `cat < in | wc`. There is no
//! quoting or escaping.

use std::io;
use std::io::BufRead;

use crate::types::Argv;

pub enum ReadOutcome {
	Line(Argv),
	Eof,
	Failed(io::Error),
}

/// Source of one argument vector per prompt cycle.
pub trait LineReader {
	fn read_argv(&mut self) -> ReadOutcome;
}

pub struct BufLineReader<R> {
	input: R,
	line: String,
}

impl<R: BufRead> BufLineReader<R> {
	pub fn new(input: R) -> BufLineReader<R> {
		BufLineReader { input: input, line: String::new() }
	}
}

impl<R: BufRead> LineReader for BufLineReader<R> {
	fn read_argv(&mut self) -> ReadOutcome {
		self.line.clear();
		match self.input.read_line(&mut self.line) {
			Ok(0) => ReadOutcome::Eof,
			Ok(_) => ReadOutcome::Line(tokenize(&self.line)),
			Err(e) => ReadOutcome::Failed(e),
		}
	}
}

struct Tokenizer<'a> {
	line: &'a str,
	i: usize,
}

impl<'a> Tokenizer<'a> {
	fn proceed_while<F>(&mut self, f: F) where F: Fn(u8) -> bool {
		while let Some(c) = self.line.as_bytes().get(self.i) {
			if !f(*c) { break; }
			self.i += 1;
		}
	}

	fn is_whitespace(c: u8) -> bool {
		match c {
			b' ' | b'\t' | b'\n' | b'\r' => true,
			_ => false,
		}
	}

	fn is_operator(c: u8) -> bool {
		match c {
			b'>' | b'<' | b'&' | b'|' => true,
			_ => false,
		}
	}

	fn is_letter(c: u8) -> bool {
		!Tokenizer::is_operator(c) && !Tokenizer::is_whitespace(c)
	}

	fn next_token(&mut self) -> Option<&'a str> {
		self.proceed_while(Tokenizer::is_whitespace);
		let orig = self.i;
		match self.line.as_bytes().get(self.i) {
			None => None,
			Some(&c) if Tokenizer::is_operator(c) => {
				self.i += 1;
				Some(&self.line[orig .. self.i])
			},
			Some(_) => {
				self.proceed_while(Tokenizer::is_letter);
				Some(&self.line[orig .. self.i])
			},
		}
	}
}

pub fn tokenize(line: &str) -> Argv {
	let mut tokenizer = Tokenizer { line: line, i: 0 };
	let mut words = vec![];
	while let Some(token) = tokenizer.next_token() {
		words.push(token.to_string());
	}
	Argv::new(words)
}
