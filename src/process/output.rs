//! User-facing text produced while pipeline steps run
//!
//! Steps and child processes push lines into an [`OutputSink`]; whoever owns the
//! receiving end decides where they are written.

use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Message from the scaffolder itself
    Status(String),

    /// A line printed by a child process
    Program(String),
}

/// Sending half of the step output channel. The default sink discards
/// everything.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    sender: Option<mpsc::UnboundedSender<OutputLine>>,
}

impl OutputSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OutputLine>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    pub fn discard() -> Self {
        Self::default()
    }

    pub fn send(&self, line: OutputLine) {
        if let Some(sender) = &self.sender {
            if sender.send(line).is_err() {
                debug!("Output receiver closed, dropping line");
            }
        }
    }

    pub fn status(&self, text: impl Into<String>) {
        self.send(OutputLine::Status(text.into()));
    }

    pub fn program(&self, text: impl Into<String>) {
        self.send(OutputLine::Program(text.into()));
    }
}
