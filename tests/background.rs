//! Kept apart from other tests: it forks from the test process and reaps
//! by pid.

use std::thread::sleep;
use std::time::{Duration,Instant};

use minish::eval::{self,EvalResult};
use minish::global::State;
use minish::parser::tokenize;

#[test]
fn background_commands_are_tracked_then_reaped() {
	let mut state = State::new();
	assert_eq!(eval::eval(&mut state, tokenize("true &")), EvalResult::Continue);
	assert_eq!(eval::eval(&mut state, tokenize("true | true &")), EvalResult::Continue);
	assert_eq!(state.background().len(), 3);

	let deadline = Instant::now() + Duration::from_secs(5);
	while !state.background().is_empty() && Instant::now() < deadline {
		sleep(Duration::from_millis(50));
		state.reap_background();
	}
	assert!(state.background().is_empty());
}
