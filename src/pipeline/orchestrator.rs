use super::context::ScaffoldContext;
use super::error::ScaffoldError;
use super::step::{ScaffoldStep, StepOutcome};
use super::steps::{
    CopyTemplatesStep, InstallDependenciesStep, WriteManifestStep, WriteReadmeStep,
};
use crate::progress::{ProgressEvent, ProgressHandler};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Names of the steps that ran and of those that skipped themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub completed: Vec<&'static str>,
    pub skipped: Vec<(&'static str, String)>,
}

/// Runs scaffold steps in order. The first failing step ends the run and no
/// later step executes.
pub struct ScaffoldPipeline {
    steps: Vec<Box<dyn ScaffoldStep>>,
    progress_handler: Option<Arc<dyn ProgressHandler>>,
}

impl ScaffoldPipeline {
    /// Manifest, install, readme, templates
    pub fn new(progress_handler: Option<Arc<dyn ProgressHandler>>) -> Self {
        Self::with_steps(
            vec![
                Box::new(WriteManifestStep),
                Box::new(InstallDependenciesStep),
                Box::new(WriteReadmeStep),
                Box::new(CopyTemplatesStep),
            ],
            progress_handler,
        )
    }

    pub fn with_steps(
        steps: Vec<Box<dyn ScaffoldStep>>,
        progress_handler: Option<Arc<dyn ProgressHandler>>,
    ) -> Self {
        Self {
            steps,
            progress_handler,
        }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }

    pub async fn execute(&self, context: &ScaffoldContext) -> Result<PipelineReport, ScaffoldError> {
        let start = Instant::now();
        info!("Scaffolding {}", context.work_dir.display());
        self.emit(ProgressEvent::Started {
            work_dir: context.work_dir.display().to_string(),
        });

        let mut report = PipelineReport::default();

        for step in &self.steps {
            let name = step.name();
            self.emit(ProgressEvent::StepStarted {
                step: name.to_string(),
            });

            let step_start = Instant::now();
            match step.execute(context).await {
                Ok(StepOutcome::Done) => {
                    self.emit(ProgressEvent::StepComplete {
                        step: name.to_string(),
                        duration: step_start.elapsed(),
                    });
                    report.completed.push(name);
                }
                Ok(StepOutcome::Skipped(reason)) => {
                    self.emit(ProgressEvent::StepSkipped {
                        step: name.to_string(),
                        reason: reason.clone(),
                    });
                    report.skipped.push((name, reason));
                }
                Err(e) => {
                    self.emit(ProgressEvent::Failed {
                        step: name.to_string(),
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            }

            debug!("Step {} finished", name);
        }

        self.emit(ProgressEvent::Completed {
            steps: report.completed.len(),
            total_time: start.elapsed(),
        });

        Ok(report)
    }
}
