use log::debug;

use crate::builtin;
use crate::error::{ShellError,ShellResult};
use crate::global;
use crate::launch;
use crate::pipeline;
use crate::redirect;
use crate::types::{Argv,PIPE};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EvalResult {
	Continue,
	Exit,
}

fn eval_command(state: &mut global::State, mut argv: Argv) -> ShellResult<()> {
	let background = argv.take_background()?;
	if argv.is_empty() {
		return Err(ShellError::Syntax("missing command before '&'".to_string()));
	}

	if argv.contains(PIPE) {
		let (first, second) = pipeline::split(argv)?;
		return pipeline::run(state, first, second, background);
	}

	if let Some(func) = argv.name().and_then(builtin::match_builtin) {
		if argv.has_redirection() {
			return Err(ShellError::Syntax(format!("{}: cannot be combined with redirection", argv.words()[0])));
		}
		return func(state, argv.args());
	}

	let redirection = redirect::resolve(argv)?;
	launch::launch(state, redirection, background)
}

/// Evaluates one tokenized line. Errors are printed here and never end
/// the session; only `exit` does.
pub fn eval(state: &mut global::State, argv: Argv) -> EvalResult {
	match argv.name() {
		None => return EvalResult::Continue,
		Some("exit") => return EvalResult::Exit,
		Some(_) => {},
	}
	debug!("eval {:?}", argv.words());
	if let Err(e) = eval_command(state, argv) {
		eprintln!("{}", e);
	}
	EvalResult::Continue
}
