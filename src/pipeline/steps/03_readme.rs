use crate::manifest::{render_readme, README_FILE};
use crate::pipeline::context::ScaffoldContext;
use crate::pipeline::error::ScaffoldError;
use crate::pipeline::step::{ScaffoldStep, StepOutcome};
use async_trait::async_trait;
use tracing::info;

pub struct WriteReadmeStep;

#[async_trait]
impl ScaffoldStep for WriteReadmeStep {
    fn name(&self) -> &'static str {
        "WriteReadme"
    }

    async fn execute(&self, context: &ScaffoldContext) -> Result<StepOutcome, ScaffoldError> {
        let readme = render_readme(&context.manifest.descriptor);
        let path = context.file_system.join(&context.work_dir, README_FILE);

        context
            .file_system
            .write(&path, &readme)
            .map_err(|e| ScaffoldError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "Wrote readme");
        Ok(StepOutcome::Done)
    }
}
