use std::ffi::{CStr,CString};
use std::io;
use std::io::Write;
use std::os::fd::{AsRawFd,IntoRawFd,OwnedFd,RawFd};

use log::debug;
use nix::errno::Errno;
use nix::fcntl::{self,FcntlArg,FdFlag};
use nix::unistd::{self,ForkResult,Pid};

use crate::error::{ShellError,ShellResult};
use crate::global;
use crate::job;
use crate::redirect::Redirection;
use crate::types::Argv;

const STATUS_NOT_FOUND: i32 = 127;
const STATUS_NOT_EXECUTABLE: i32 = 126;

/// Makes `fd` the descriptor `target` and closes the original.
fn install(fd: Option<OwnedFd>, target: RawFd) -> ShellResult<()> {
	let fd = match fd {
		Some(fd) => fd,
		None => return Ok(()),
	};
	if fd.as_raw_fd() == target {
		let raw = fd.into_raw_fd();
		fcntl::fcntl(raw, FcntlArg::F_SETFD(FdFlag::empty())).map_err(ShellError::Dup)?;
		return Ok(());
	}
	unistd::dup2(fd.as_raw_fd(), target).map_err(ShellError::Dup)?;
	Ok(())
}

fn exec_command(name: &CStr, argv: &[CString], stdin: Option<OwnedFd>, stdout: Option<OwnedFd>) -> ! {
	let wired = install(stdin, libc::STDIN_FILENO).and_then(|_| install(stdout, libc::STDOUT_FILENO));
	if let Err(e) = wired {
		let _ = writeln!(&mut io::stderr(), "{}", e);
		unsafe { libc::_exit(1) }
	}
	let errno = match unistd::execvp(name, argv) {
		Ok(never) => match never {},
		Err(e) => e,
	};
	let name = name.to_string_lossy();
	let status = match errno {
		Errno::ENOENT => {
			let _ = writeln!(&mut io::stderr(), "{}: command not found", name);
			STATUS_NOT_FOUND
		},
		e => {
			let _ = writeln!(&mut io::stderr(), "{}: {}", name, e.desc());
			STATUS_NOT_EXECUTABLE
		},
	};
	unsafe { libc::_exit(status) }
}

/// Forks a child running `argv` with the given descriptors as its stdin and
/// stdout. Descriptors in `unused` are closed in the child only; the parent
/// drops its copies of `stdin` and `stdout` before returning.
pub fn spawn(state: &global::State, argv: &Argv, stdin: Option<OwnedFd>, stdout: Option<OwnedFd>, unused: &[&OwnedFd]) -> ShellResult<Pid> {
	if argv.is_empty() {
		return Err(ShellError::Syntax("missing command".to_string()));
	}
	let argv = argv.to_cstrings()?;
	let _ = io::stdout().flush();

	match unsafe { unistd::fork() }.map_err(ShellError::Fork)? {
		ForkResult::Parent { child } => {
			debug!("forked pid {} for {:?} in {}", child, argv, state.cwd().display());
			Ok(child)
		},
		ForkResult::Child => {
			for fd in unused {
				let _ = unistd::close(fd.as_raw_fd());
			}
			exec_command(&argv[0], &argv, stdin, stdout)
		},
	}
}

/// Runs one redirected command, waiting for it unless `background` is set.
pub fn launch(state: &mut global::State, redirection: Redirection, background: bool) -> ShellResult<()> {
	let Redirection { argv, stdin, stdout } = redirection;
	let pid = spawn(state, &argv, stdin, stdout, &[])?;
	if background {
		state.track_background(pid);
	} else {
		job::wait_foreground(pid)?;
	}
	Ok(())
}
