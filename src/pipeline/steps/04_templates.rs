use crate::pipeline::config::COPY_PROGRAM;
use crate::pipeline::context::ScaffoldContext;
use crate::pipeline::error::ScaffoldError;
use crate::pipeline::step::{ScaffoldStep, StepOutcome};
use crate::process::CommandSpec;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Recursively copies the template directory's contents into the project
pub struct CopyTemplatesStep;

impl CopyTemplatesStep {
    pub fn command(context: &ScaffoldContext) -> CommandSpec {
        // `dir/.` copies the contents, dotfiles included, rather than the dir itself
        let source = context.config.templates_dir.join(".");
        CommandSpec::new(COPY_PROGRAM, &context.work_dir).args([
            "-r".to_string(),
            source.display().to_string(),
            ".".to_string(),
        ])
    }
}

#[async_trait]
impl ScaffoldStep for CopyTemplatesStep {
    fn name(&self) -> &'static str {
        "CopyTemplates"
    }

    async fn execute(&self, context: &ScaffoldContext) -> Result<StepOutcome, ScaffoldError> {
        let templates_dir = &context.config.templates_dir;
        if !context.file_system.is_dir(templates_dir) {
            warn!(dir = %templates_dir.display(), "Template directory not found");
        }

        let command = Self::command(context);
        let outcome = context
            .runner
            .run(&command, &context.output)
            .await
            .map_err(|e| ScaffoldError::SpawnFailed {
                program: command.program.clone(),
                message: e.to_string(),
            })?;

        if !outcome.success() {
            error!(code = ?outcome.code, "Template copy exited unsuccessfully");
            return Err(ScaffoldError::CopyFailed { code: outcome.code });
        }

        info!(from = %templates_dir.display(), "Templates copied");
        Ok(StepOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::config::PipelineConfig;
    use crate::pipeline::context::test_support::mock_context;
    use crate::process::MockCommandRunner;

    #[tokio::test]
    async fn test_copies_template_contents() {
        let config = PipelineConfig::new().with_templates_dir("/opt/vladmake/templates");
        let (context, _, runner) = mock_context(MockCommandRunner::new(), config, true);

        let outcome = CopyTemplatesStep.execute(&context).await.unwrap();

        assert_eq!(outcome, StepOutcome::Done);
        let calls = runner.calls();
        assert_eq!(calls[0].program, "cp");
        assert_eq!(calls[0].args, vec!["-r", "/opt/vladmake/templates/.", "."]);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_copy_failure() {
        let runner = MockCommandRunner::new().with_exit_code("cp", 1);
        let (context, _, _) = mock_context(runner, PipelineConfig::new(), true);

        let err = CopyTemplatesStep.execute(&context).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::CopyFailed { code: Some(1) }));
        assert_eq!(err.exit_code(), 1);
    }
}
