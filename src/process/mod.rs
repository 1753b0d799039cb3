//! External program execution

mod mock;
mod output;
mod runner;

pub use mock::MockCommandRunner;
pub use output::{OutputLine, OutputSink};
pub use runner::{CommandOutcome, CommandRunner, CommandSpec, TokioCommandRunner};
