use std::io;
use io::Write;

use clap::Parser;
use log::debug;

use minish::config::{self,Config};
use minish::error::ShellError;
use minish::eval::{self,EvalResult};
use minish::global;
use minish::parser::{self,BufLineReader,LineReader,ReadOutcome};

fn main() {
	config::init_logging();
	let config = Config::parse();
	let mut state = global::State::new();

	if let Some(line) = config.command {
		eval::eval(&mut state, parser::tokenize(&line));
		return;
	}

	let mut stdout = io::stdout();
	let stdin = io::stdin();
	let mut reader = BufLineReader::new(stdin.lock());
	loop {
		state.reap_background();
		let _ = stdout.write_all(config.prompt.as_bytes());
		let _ = stdout.flush();
		let argv = match reader.read_argv() {
			ReadOutcome::Line(argv) => argv,
			ReadOutcome::Eof => break,
			ReadOutcome::Failed(e) => {
				eprintln!("{}", ShellError::Read(e));
				continue;
			},
		};
		if eval::eval(&mut state, argv) == EvalResult::Exit {
			break;
		}
	}
	debug!("leaving with {} background pid(s) unreaped", state.background().len());
}
