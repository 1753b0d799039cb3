//! Prompt session state machine
//!
//! A [`Session`] owns the question list, the cursor and the answers collected
//! so far. Input is fed one line at a time through [`Session::submit`], which is
//! the only transition function: it either rejects the line (state unchanged),
//! advances to the next question, or completes the session. The session can be
//! driven without any I/O, which is how the sequencer and the tests use it.

use super::question::{Field, Question};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A line was submitted after the last question was answered
    #[error("All questions have already been answered")]
    AlreadyComplete,

    /// The question list was empty
    #[error("A session needs at least one question")]
    NoQuestions,
}

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the answer to the question at this index
    Asking(usize),
    Complete,
}

/// Result of feeding one line to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The line was refused; the same question must be asked again
    Rejected { pattern: String },
    /// The line was accepted and the cursor moved to question `next`
    Advanced { next: usize },
    /// The last question was answered. Emitted exactly once per session.
    Completed(AnswerSet),
}

/// Validated answers in question order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<String>,
}

impl AnswerSet {
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.answers
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.answers.get(field.index()).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.get(Field::PackageName).unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.get(Field::Description).unwrap_or_default()
    }

    /// Raw, comma-separated keywords as typed
    pub fn keywords(&self) -> &str {
        self.get(Field::Keywords).unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.get(Field::Author).unwrap_or_default()
    }

    pub fn license(&self) -> &str {
        self.get(Field::License).unwrap_or_default()
    }

    fn push(&mut self, answer: String) {
        self.answers.push(answer);
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    answers: AnswerSet,
    state: SessionState,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            questions,
            answers: AnswerSet::default(),
            state: SessionState::Asking(0),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question awaiting an answer, `None` once complete
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Asking(index) => self.questions.get(index),
            SessionState::Complete => None,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Feed one input line (without its line terminator)
    pub fn submit(&mut self, line: &str) -> Result<Transition, SessionError> {
        let index = match self.state {
            SessionState::Asking(index) => index,
            SessionState::Complete => return Err(SessionError::AlreadyComplete),
        };
        let question = &self.questions[index];

        let response = question.effective_response(line);
        if !question.accepts(response) {
            debug!(question = question.label(), "Response rejected");
            return Ok(Transition::Rejected {
                pattern: question.pattern().as_str().to_string(),
            });
        }

        let trimmed = line.trim();
        let answer = if trimmed.is_empty() {
            question.default_value().to_string()
        } else {
            trimmed.to_string()
        };
        debug!(question = question.label(), answer = %answer, "Response accepted");
        self.answers.push(answer);

        if self.answers.len() == self.questions.len() {
            self.state = SessionState::Complete;
            Ok(Transition::Completed(self.answers.clone()))
        } else {
            let next = index + 1;
            self.state = SessionState::Asking(next);
            Ok(Transition::Advanced { next })
        }
    }
}
