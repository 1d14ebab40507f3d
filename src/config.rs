use clap::Parser;
use env_logger::Env;

const LOG_ENV: &'static str = "MINISH_LOG";

#[derive(Parser, Debug)]
#[command(name = "minish", version, about = "A small interactive command interpreter")]
pub struct Config {
	/// Prompt printed before each line is read
	#[arg(long, default_value = "$ ")]
	pub prompt: String,

	/// Evaluate LINE and exit instead of reading from stdin
	#[arg(short = 'c', long = "command", value_name = "LINE")]
	pub command: Option<String>,
}

/// Logs go to stderr; the level comes from `MINISH_LOG` and defaults to `warn`.
pub fn init_logging() {
	env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn")).init();
}
