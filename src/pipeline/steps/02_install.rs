use crate::pipeline::context::ScaffoldContext;
use crate::pipeline::error::ScaffoldError;
use crate::pipeline::step::{ScaffoldStep, StepOutcome};
use crate::process::CommandSpec;
use async_trait::async_trait;
use tracing::{error, info};

/// Announced before the installer starts
pub const INSTALL_BANNER: &str = "Installing dependencies... may take a while!";

/// Installs the development tooling with the configured installer
pub struct InstallDependenciesStep;

impl InstallDependenciesStep {
    pub fn command(context: &ScaffoldContext) -> CommandSpec {
        CommandSpec::new(&context.config.installer, &context.work_dir)
            .args(["i", "-D"])
            .args(context.config.dev_dependencies.iter().cloned())
    }
}

#[async_trait]
impl ScaffoldStep for InstallDependenciesStep {
    fn name(&self) -> &'static str {
        "InstallDependencies"
    }

    async fn execute(&self, context: &ScaffoldContext) -> Result<StepOutcome, ScaffoldError> {
        if context.config.skip_install {
            return Ok(StepOutcome::Skipped("installation disabled".to_string()));
        }

        context.output.status(INSTALL_BANNER);

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
            error!(code = ?outcome.code, "Installer exited unsuccessfully");
            return Err(ScaffoldError::InstallFailed { code: outcome.code });
        }

        info!(packages = context.config.dev_dependencies.len(), "Dependencies installed");
        Ok(StepOutcome::Done)
    }
}
