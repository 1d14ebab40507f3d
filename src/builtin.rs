use std::path::PathBuf;

use crate::error::{ShellError,ShellResult};
use crate::global;

pub type Builtin = fn(&mut global::State, &[String]) -> ShellResult<()>;

pub fn builtin_cd(state: &mut global::State, args: &[String]) -> ShellResult<()> {
	let target = match args {
		[] => state.home().ok_or(ShellError::HomeNotSet)?,
		[path] => PathBuf::from(path),
		_ => return Err(ShellError::Syntax("cd: too many arguments".to_string())),
	};
	state.change_dir(&target)
}

pub fn match_builtin(name: &str) -> Option<Builtin> {
	match name {
		"cd" => Some(builtin_cd),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_cd_is_builtin() {
		assert!(match_builtin("cd").is_some());
		assert!(match_builtin("ls").is_none());
		assert!(match_builtin("exit").is_none());
	}

	#[test]
	fn cd_rejects_extra_arguments() {
		let mut state = global::State::new();
		let before = state.cwd().to_path_buf();
		let args = vec!["/".to_string(), "/tmp".to_string()];
		assert!(matches!(builtin_cd(&mut state, &args), Err(ShellError::Syntax(_))));
		assert_eq!(state.cwd(), before.as_path());
	}
}
