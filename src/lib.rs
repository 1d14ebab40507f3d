//! Command execution engine of a small interactive shell: redirection,
//! the `cd` builtin, process launching, two-stage pipelines and waiting.

pub mod builtin;
pub mod config;
pub mod error;
pub mod eval;
pub mod global;
pub mod job;
pub mod launch;
pub mod parser;
pub mod pipeline;
pub mod redirect;
pub mod types;
