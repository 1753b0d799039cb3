use super::context::ScaffoldContext;
use super::error::ScaffoldError;
use async_trait::async_trait;

/// What a step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped(String),
}

#[async_trait]
pub trait ScaffoldStep: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, context: &ScaffoldContext) -> Result<StepOutcome, ScaffoldError>;
}
