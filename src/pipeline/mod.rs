pub mod config;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod step;
pub mod steps;

pub use config::PipelineConfig;
pub use context::ScaffoldContext;
pub use error::ScaffoldError;
pub use orchestrator::{PipelineReport, ScaffoldPipeline};
pub use step::{ScaffoldStep, StepOutcome};
