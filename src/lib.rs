//! vladmake - interactive scaffolder for TypeScript packages
//!
//! Asks five questions (package name, description, keywords, author, license),
//! derives a `package.json` and a `readme.md` from the answers, installs the
//! development tooling and copies the bundled templates into the project.
//!
//! # Example Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use vladmake::cli::{run_scaffold, ScaffoldRequest};
//! use vladmake::fs::RealFileSystem;
//! use vladmake::pipeline::PipelineConfig;
//! use vladmake::process::TokioCommandRunner;
//!
//! # async fn example() -> Result<(), vladmake::ScaffoldError> {
//! let request = ScaffoldRequest::new(
//!     PathBuf::from("/work/my-lib"),
//!     PipelineConfig::new().with_skip_install(true),
//! );
//! let answers: &[u8] = b"\nA tiny lib\nts,lib\nme\n\n";
//! let mut out: Vec<u8> = Vec::new();
//! run_scaffold(
//!     &request,
//!     answers,
//!     &mut out,
//!     Arc::new(RealFileSystem),
//!     Arc::new(TokioCommandRunner::new()),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`prompt`]: questions, the answer state machine and its async driver
//! - [`manifest`]: project descriptor, origin lookup and readme rendering
//! - [`pipeline`]: ordered scaffold steps run after the prompts complete
//! - [`fs`] and [`process`]: file system and child process seams

pub mod cli;
pub mod config;
pub mod fs;
pub mod manifest;
pub mod pipeline;
pub mod process;
pub mod progress;
pub mod prompt;
pub mod util;

pub use config::{ConfigError, ScaffoldConfig};
pub use manifest::{ManifestBuilder, PreparedManifest, ProjectDescriptor};
pub use pipeline::{PipelineConfig, PipelineReport, ScaffoldError, ScaffoldPipeline};
pub use prompt::{AnswerSet, PromptError, PromptSequencer, Question, Session, Transition};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
