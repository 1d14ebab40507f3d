use std::{ffi,io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
	#[error("Syntax error: Missing filename after '{0}'")]
	MissingOperand(&'static str),
	#[error("Syntax error: {0}")]
	Syntax(String),
	#[error("open: {path}: {source}")]
	Open { path: String, #[source] source: io::Error },
	#[error("pipe: {0}")]
	Pipe(#[source] nix::Error),
	#[error("dup2: {0}")]
	Dup(#[source] nix::Error),
	#[error("fork: {0}")]
	Fork(#[source] nix::Error),
	#[error("waitpid: {0}")]
	Wait(#[source] nix::Error),
	#[error("cd: {path}: {source}")]
	Cd { path: String, #[source] source: io::Error },
	#[error("cd: HOME not set")]
	HomeNotSet,
	#[error("argument contains a nul byte: {0}")]
	Nul(#[from] ffi::NulError),
	#[error("Error: Failed to get user input: {0}")]
	Read(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
