//! Interactive collection of project metadata
//!
//! - [`question`]: the five fixed questions with defaults and patterns
//! - [`session`]: the state machine that validates and accumulates answers
//! - [`sequencer`]: async driver that runs a session over stdin/stdout

pub mod question;
pub mod sequencer;
pub mod session;

pub use question::{project_questions, Field, Question};
pub use sequencer::{PromptError, PromptSequencer};
pub use session::{AnswerSet, Session, SessionError, SessionState, Transition};
