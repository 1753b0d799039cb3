use crate::config::ConfigError;
use crate::prompt::PromptError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scaffolding errors. Each one ends the run with [`ScaffoldError::exit_code`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Dependency installer exited unsuccessfully
    #[error("Dependency installation failed ({})", describe_exit(.code))]
    InstallFailed { code: Option<i32> },

    /// Template copy exited unsuccessfully
    #[error("Copying templates failed ({})", describe_exit(.code))]
    CopyFailed { code: Option<i32> },

    /// A collaborator program could not be started
    #[error("Failed to run {program}: {message}")]
    SpawnFailed { program: String, message: String },

    /// Writing a generated file failed
    #[error("Failed to write {}: {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl ScaffoldError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns a user-facing message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            ScaffoldError::InstallFailed { .. } => format!(
                "Error: {}\n\n\
                 Some npm error occurred on dependency installation.\n\
                 Check the installer output above, then re-run once the problem is fixed.",
                self
            ),
            ScaffoldError::CopyFailed { .. } => format!(
                "Error: {}\n\n\
                 Some error occurred on copying files.\n\
                 Check that the template directory exists (--templates or VLADMAKE_TEMPLATES_DIR).",
                self
            ),
            ScaffoldError::SpawnFailed { program, .. } => format!(
                "Error: {}\n\n\
                 Make sure '{}' is installed and on your PATH.",
                self, program
            ),
            ScaffoldError::Prompt(PromptError::InputClosed { .. }) => format!(
                "Error: {}\n\nAll five questions must be answered before anything is written.",
                self
            ),
            _ => format!("Error: {}", self),
        }
    }
}
