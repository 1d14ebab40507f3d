use std::io::Write;
use std::path::Path;
use std::process::{Command,Output,Stdio};

pub struct Session {
	command: Command,
}

impl Session {
	pub fn new(cwd: &Path) -> Session {
		let mut command = Command::new(env!("CARGO_BIN_EXE_minish"));
		command.arg("--prompt").arg("")
			.current_dir(cwd)
			.env_remove("MINISH_LOG")
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped());
		Session { command: command }
	}

	pub fn env(mut self, key: &str, value: &Path) -> Session {
		self.command.env(key, value);
		self
	}

	pub fn quiet_stderr(mut self) -> Session {
		self.command.stderr(Stdio::null());
		self
	}

	/// Feeds `script` on stdin and collects everything the shell printed.
	pub fn run(mut self, script: &str) -> Output {
		let mut child = self.command.spawn().expect("spawn minish");
		{
			let mut stdin = child.stdin.take().unwrap();
			stdin.write_all(script.as_bytes()).unwrap();
		}
		child.wait_with_output().unwrap()
	}
}

pub fn stdout_of(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).into_owned()
}
