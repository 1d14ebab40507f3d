use std::{env,mem};
use std::path::{Path,PathBuf};

use log::{debug,info,warn};
use nix::unistd::Pid;

use crate::error::{ShellError,ShellResult};
use crate::job;

/// Interpreter-wide state. The working directory is captured at startup
/// and only changed through `change_dir`; children inherit it at fork.
pub struct State {
	cwd: PathBuf,
	background: Vec<Pid>,
}

impl State {
	pub fn new() -> State {
		let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
		State { cwd: cwd, background: vec![] }
	}

	pub fn cwd(&self) -> &Path {
		&self.cwd
	}

	pub fn home(&self) -> Option<PathBuf> {
		env::var_os("HOME").map(PathBuf::from)
	}

	pub fn change_dir(&mut self, target: &Path) -> ShellResult<()> {
		env::set_current_dir(target)
			.map_err(|e| ShellError::Cd { path: target.display().to_string(), source: e })?;
		let cwd = env::current_dir().unwrap_or_else(|_| self.cwd.join(target));
		let previous = mem::replace(&mut self.cwd, cwd);
		env::set_var("OLDPWD", &previous);
		env::set_var("PWD", &self.cwd);
		debug!("cwd {} -> {}", previous.display(), self.cwd.display());
		Ok(())
	}

	pub fn track_background(&mut self, pid: Pid) {
		debug!("pid {} running in background", pid);
		self.background.push(pid);
	}

	pub fn background(&self) -> &[Pid] {
		&self.background
	}

	/// Collects background children that have exited since the last call.
	pub fn reap_background(&mut self) {
		self.background.retain(|&pid| match job::try_wait(pid) {
			Ok(None) => true,
			Ok(Some(outcome)) => {
				info!("background pid {} finished: {:?}", pid, outcome);
				false
			},
			Err(e) => {
				warn!("background pid {}: {}", pid, e);
				false
			},
		});
	}
}
