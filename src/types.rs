use std::ffi::CString;

use crate::error::{ShellError,ShellResult};

pub const REDIRECT_IN: &'static str = "<";
pub const REDIRECT_OUT: &'static str = ">";
pub const PIPE: &'static str = "|";
pub const BACKGROUND: &'static str = "&";

pub fn is_operator(word: &str) -> bool {
	match word {
		REDIRECT_IN | REDIRECT_OUT | PIPE | BACKGROUND => true,
		_ => false,
	}
}

/// One command line, or one stage of a pipeline, as owned words.
///
/// Operator tokens are removed from the vector before it reaches the
/// launcher; the words are released when the vector is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
	words: Vec<String>,
}

impl Argv {
	pub fn new(words: Vec<String>) -> Argv {
		Argv { words: words }
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn name(&self) -> Option<&str> {
		self.words.first().map(|w| w.as_str())
	}

	pub fn args(&self) -> &[String] {
		if self.words.is_empty() { &[] } else { &self.words[1..] }
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn into_words(self) -> Vec<String> {
		self.words
	}

	pub fn position(&self, token: &str) -> Option<usize> {
		self.words.iter().position(|w| w == token)
	}

	pub fn contains(&self, token: &str) -> bool {
		self.position(token).is_some()
	}

	pub fn has_redirection(&self) -> bool {
		self.contains(REDIRECT_IN) || self.contains(REDIRECT_OUT)
	}

	/// Strips a trailing `&`, reporting whether one was present.
	pub fn take_background(&mut self) -> ShellResult<bool> {
		match self.position(BACKGROUND) {
			None => Ok(false),
			Some(i) if i + 1 == self.words.len() => {
				self.words.truncate(i);
				Ok(true)
			},
			Some(i) => Err(ShellError::Syntax(format!("unexpected '{}' after '&'", self.words[i + 1]))),
		}
	}

	/// Splits at `at`, dropping the separator token itself.
	pub fn split_off_at(mut self, at: usize) -> (Argv, Argv) {
		let mut rest = self.words.split_off(at);
		rest.remove(0);
		(self, Argv::new(rest))
	}

	pub fn to_cstrings(&self) -> ShellResult<Vec<CString>> {
		let argv: Result<Vec<CString>, _> = self.words.iter().map(|w| CString::new(w.as_str())).collect();
		Ok(argv?)
	}
}

impl<'a> From<Vec<&'a str>> for Argv {
	fn from(words: Vec<&'a str>) -> Argv {
		Argv::new(words.into_iter().map(String::from).collect())
	}
}
