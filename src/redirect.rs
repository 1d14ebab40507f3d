use std::fs;
use std::os::fd::OwnedFd;
use std::os::unix::fs::OpenOptionsExt;

use log::debug;

use crate::error::{ShellError,ShellResult};
use crate::types::{self,Argv,REDIRECT_IN,REDIRECT_OUT};

const OUTPUT_MODE: u32 = 0o644;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RedirectType { Input, Output }

impl RedirectType {
	fn from_token(token: &str) -> Option<RedirectType> {
		match token {
			REDIRECT_IN => Some(RedirectType::Input),
			REDIRECT_OUT => Some(RedirectType::Output),
			_ => None,
		}
	}

	fn operator(self) -> &'static str {
		match self {
			RedirectType::Input => REDIRECT_IN,
			RedirectType::Output => REDIRECT_OUT,
		}
	}
}

/// A command with its redirection operators stripped, holding the files
/// they named. The descriptors close when this value is dropped, so an
/// aborted command never leaks them.
#[derive(Debug)]
pub struct Redirection {
	pub argv: Argv,
	pub stdin: Option<OwnedFd>,
	pub stdout: Option<OwnedFd>,
}

fn open_target(target: &str, typ: RedirectType) -> ShellResult<OwnedFd> {
	let mut oopt = fs::OpenOptions::new();
	let _ = match typ {
		RedirectType::Input => oopt.read(true),
		RedirectType::Output => oopt.write(true).create(true).truncate(true).mode(OUTPUT_MODE),
	};
	let file = oopt.open(target).map_err(|e| ShellError::Open { path: target.to_string(), source: e })?;
	Ok(OwnedFd::from(file))
}

/// Opens every `<`/`>` target in `argv`, left to right. A later operator of
/// the same kind replaces (and closes) the descriptor of an earlier one.
pub fn resolve(argv: Argv) -> ShellResult<Redirection> {
	let mut words = Vec::with_capacity(argv.len());
	let mut stdin: Option<OwnedFd> = None;
	let mut stdout: Option<OwnedFd> = None;

	let mut iter = argv.into_words().into_iter();
	while let Some(word) = iter.next() {
		let typ = match RedirectType::from_token(&word) {
			Some(typ) => typ,
			None => {
				words.push(word);
				continue;
			},
		};
		let target = match iter.next() {
			Some(ref t) if types::is_operator(t) => None,
			t => t,
		};
		let target = target.ok_or(ShellError::MissingOperand(typ.operator()))?;
		let fd = open_target(&target, typ)?;
		debug!("redirect {} {} -> {:?}", typ.operator(), target, fd);
		match typ {
			RedirectType::Input => stdin = Some(fd),
			RedirectType::Output => stdout = Some(fd),
		}
	}

	Ok(Redirection { argv: Argv::new(words), stdin: stdin, stdout: stdout })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;
	use std::io::{Read,Write};
	use std::os::unix::fs::PermissionsExt;

	fn path_str(dir: &tempfile::TempDir, name: &str) -> String {
		dir.path().join(name).to_str().unwrap().to_string()
	}

	#[test]
	fn plain_command_passes_through() {
		let r = resolve(Argv::from(vec!["ls", "-l"])).unwrap();
		assert_eq!(r.argv, Argv::from(vec!["ls", "-l"]));
		assert!(r.stdin.is_none());
		assert!(r.stdout.is_none());
	}

	#[test]
	fn strips_operators_and_opens_both_ends() {
		let dir = tempfile::tempdir().unwrap();
		let input = path_str(&dir, "in");
		let output = path_str(&dir, "out");
		fs::write(&input, "data\n").unwrap();

		let r = resolve(Argv::from(vec!["sort", "<", input.as_str(), "-r", ">", output.as_str()])).unwrap();
		assert_eq!(r.argv, Argv::from(vec!["sort", "-r"]));

		let mut buf = String::new();
		File::from(r.stdin.unwrap()).read_to_string(&mut buf).unwrap();
		assert_eq!(buf, "data\n");

		File::from(r.stdout.unwrap()).write_all(b"sorted\n").unwrap();
		assert_eq!(fs::read_to_string(&output).unwrap(), "sorted\n");
	}

	#[test]
	fn output_truncates_and_uses_regular_permissions() {
		let dir = tempfile::tempdir().unwrap();
		let output = path_str(&dir, "out");
		fs::write(&output, "old contents that are long\n").unwrap();

		let r = resolve(Argv::from(vec!["echo", ">", output.as_str()])).unwrap();
		drop(r);
		assert_eq!(fs::read_to_string(&output).unwrap(), "");

		let fresh = path_str(&dir, "fresh");
		drop(resolve(Argv::from(vec!["echo", ">", fresh.as_str()])).unwrap());
		let mode = fs::metadata(&fresh).unwrap().permissions().mode() & 0o777;
		assert_eq!(mode & !OUTPUT_MODE, 0);
	}

	#[test]
	fn missing_filename_is_reported() {
		match resolve(Argv::from(vec!["cat", "<"])) {
			Err(ShellError::MissingOperand(op)) => assert_eq!(op, "<"),
			other => panic!("unexpected {:?}", other),
		}
		match resolve(Argv::from(vec!["echo", ">", "<", "x"])) {
			Err(ShellError::MissingOperand(op)) => assert_eq!(op, ">"),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn unopenable_input_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let missing = path_str(&dir, "missing");
		match resolve(Argv::from(vec!["cat", "<", missing.as_str()])) {
			Err(ShellError::Open { path, .. }) => assert_eq!(path, missing),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn last_output_redirection_wins() {
		let dir = tempfile::tempdir().unwrap();
		let first = path_str(&dir, "first");
		let second = path_str(&dir, "second");

		let r = resolve(Argv::from(vec!["echo", ">", first.as_str(), ">", second.as_str()])).unwrap();
		File::from(r.stdout.unwrap()).write_all(b"x").unwrap();
		assert_eq!(fs::read_to_string(&first).unwrap(), "");
		assert_eq!(fs::read_to_string(&second).unwrap(), "x");
	}
}
