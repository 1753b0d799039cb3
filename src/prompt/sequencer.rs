use super::session::{AnswerSet, Session, SessionError, Transition};
use colored::Colorize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file before every question was answered
    #[error("Input closed while waiting for '{question}'")]
    InputClosed { question: String },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Drives a [`Session`] over a line-oriented reader, writing prompts and
/// rejection notices to `writer`.
pub struct PromptSequencer<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R, W> PromptSequencer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Render prompts in bold bright white
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Ask every question until the session completes
    pub async fn run(&mut self, mut session: Session) -> Result<AnswerSet, PromptError> {
        info!(questions = session.question_count(), "Starting prompt session");
        let mut line = String::new();

        loop {
            let question = session
                .current_question()
                .ok_or(SessionError::AlreadyComplete)?;
            let label = question.label().to_string();
            let prompt = question.prompt_text();

            self.write_prompt(&prompt).await?;

            line.clear();
            let read = self.reader.read_line(&mut line).await?;
            if read == 0 {
                return Err(PromptError::InputClosed { question: label });
            }

            let input = line.trim_end_matches(['\n', '\r']);
            match session.submit(input)? {
                Transition::Rejected { pattern } => {
                    self.writer
                        .write_all(format!("  Doesn't match /{}/.\n", pattern).as_bytes())
                        .await?;
                }
                Transition::Advanced { next } => {
                    debug!(question = %label, next, "Advanced to next question");
                }
                Transition::Completed(answers) => {
                    self.writer.flush().await?;
                    info!(answers = answers.len(), "Prompt session complete");
                    return Ok(answers);
                }
            }
        }
    }

    async fn write_prompt(&mut self, prompt: &str) -> std::io::Result<()> {
        if self.styled {
            let styled = prompt.bright_white().bold().to_string();
            self.writer.write_all(styled.as_bytes()).await?;
        } else {
            self.writer.write_all(prompt.as_bytes()).await?;
        }
        self.writer.flush().await
    }
}
