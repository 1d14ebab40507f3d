//! Two-stage pipelines.
//!
//! Only the first `|` separates stages; any later `|` is passed to the
//! second command as an ordinary argument.

use log::{debug,warn};
use nix::fcntl::OFlag;
use nix::unistd::{self,Pid};

use crate::builtin;
use crate::error::{ShellError,ShellResult};
use crate::global;
use crate::job;
use crate::launch;
use crate::redirect;
use crate::types::{Argv,PIPE};

/// Splits `argv` at its first `|` into two non-empty commands.
pub fn split(argv: Argv) -> ShellResult<(Argv, Argv)> {
	let at = match argv.position(PIPE) {
		Some(at) => at,
		None => return Err(ShellError::Syntax("no '|' in command".to_string())),
	};
	let (first, second) = argv.split_off_at(at);
	if first.is_empty() || second.is_empty() {
		return Err(ShellError::Syntax("empty command in pipeline".to_string()));
	}
	for stage in [&first, &second] {
		if let Some(name) = stage.name().filter(|name| builtin::match_builtin(name).is_some()) {
			return Err(ShellError::Syntax(format!("{}: cannot be used in a pipeline", name)));
		}
	}
	Ok((first, second))
}

/// Runs `first | second`. Foreground pipelines wait for both stages;
/// background ones wait for neither.
pub fn run(state: &mut global::State, first: Argv, second: Argv, background: bool) -> ShellResult<()> {
	let first = redirect::resolve(first)?;
	let second = redirect::resolve(second)?;

	let (read_end, write_end) = unistd::pipe2(OFlag::O_CLOEXEC).map_err(ShellError::Pipe)?;
	debug!("pipe {:?} -> {:?}", write_end, read_end);

	let first_pid = launch::spawn(state, &first.argv, first.stdin, first.stdout.or(Some(write_end)), &[&read_end])?;
	let second_pid = match launch::spawn(state, &second.argv, second.stdin.or(Some(read_end)), second.stdout, &[]) {
		Ok(pid) => pid,
		Err(e) => {
			warn!("second stage failed to start, leaving pid {} to be reaped", first_pid);
			state.track_background(first_pid);
			return Err(e);
		},
	};

	if background {
		state.track_background(first_pid);
		state.track_background(second_pid);
		return Ok(());
	}
	wait_stages(state, &[first_pid, second_pid])
}

/// Waits for each stage in order. If a wait fails, the stages not yet
/// waited on are handed to background reaping.
fn wait_stages(state: &mut global::State, pids: &[Pid]) -> ShellResult<()> {
	for (i, &pid) in pids.iter().enumerate() {
		if let Err(e) = job::wait_foreground(pid) {
			for &rest in &pids[i + 1 ..] {
				warn!("wait on pid {} failed, leaving pid {} to be reaped", pid, rest);
				state.track_background(rest);
			}
			return Err(e);
		}
	}
	Ok(())
}
