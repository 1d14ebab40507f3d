//! Waiting on spawned commands and decoding how they ended.

use log::{debug,info};
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{self,WaitPidFlag,WaitStatus};
use nix::unistd::Pid;

use crate::error::{ShellError,ShellResult};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExitOutcome {
	Normal(i32),
	Abnormal(Signal),
}

impl ExitOutcome {
	/// The line printed for a command that exited normally with a non-zero code.
	pub fn diagnostic(self) -> Option<String> {
		match self {
			ExitOutcome::Normal(0) => None,
			ExitOutcome::Normal(code) => Some(format!("Command exited with abnormal status: {}", code)),
			ExitOutcome::Abnormal(_) => None,
		}
	}
}

pub trait WaitStatusExt {
	fn outcome(self) -> Option<ExitOutcome>;
}

impl WaitStatusExt for WaitStatus {
	fn outcome(self) -> Option<ExitOutcome> {
		match self {
			WaitStatus::Exited(_, code) => Some(ExitOutcome::Normal(code)),
			WaitStatus::Signaled(_, sig, _) => Some(ExitOutcome::Abnormal(sig)),
			_ => None,
		}
	}
}

/// Blocks until `pid` terminates and reports a non-zero normal exit.
pub fn wait_foreground(pid: Pid) -> ShellResult<ExitOutcome> {
	let outcome = loop {
		match wait::waitpid(pid, None) {
			Ok(status) => if let Some(outcome) = status.outcome() { break outcome; },
			Err(Errno::EINTR) => continue,
			Err(e) => return Err(ShellError::Wait(e)),
		}
	};
	debug!("pid {} finished: {:?}", pid, outcome);
	report(pid, outcome);
	Ok(outcome)
}

pub fn report(pid: Pid, outcome: ExitOutcome) {
	if let Some(line) = outcome.diagnostic() {
		println!("{}", line);
	}
	if let ExitOutcome::Abnormal(sig) = outcome {
		info!("pid {} terminated by {}", pid, sig);
	}
}

/// Polls `pid` without blocking. `Ok(None)` means it is still running.
pub fn try_wait(pid: Pid) -> ShellResult<Option<ExitOutcome>> {
	match wait::waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
		Ok(status) => Ok(status.outcome()),
		Err(Errno::EINTR) => Ok(None),
		Err(e) => Err(ShellError::Wait(e)),
	}
}
