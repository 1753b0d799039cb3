use crate::manifest::MANIFEST_FILE;
use crate::pipeline::context::ScaffoldContext;
use crate::pipeline::error::ScaffoldError;
use crate::pipeline::step::{ScaffoldStep, StepOutcome};
use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

/// Writes `package.json`, unless the working folder is reserved
pub struct WriteManifestStep;

#[async_trait]
impl ScaffoldStep for WriteManifestStep {
    fn name(&self) -> &'static str {
        "WriteManifest"
    }

    async fn execute(&self, context: &ScaffoldContext) -> Result<StepOutcome, ScaffoldError> {
        if !context.manifest.write_to_disk {
            return Ok(StepOutcome::Skipped(format!(
                "working folder is reserved, {} left untouched",
                MANIFEST_FILE
            )));
        }

        let json = context
            .manifest
            .descriptor
            .to_json()
            .context("Failed to serialize project descriptor to JSON")?;
        let path = context
            .file_system
            .join(&context.work_dir, MANIFEST_FILE);

        context
            .file_system
            .write(&path, &json)
            .map_err(|e| ScaffoldError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "Wrote manifest");
        Ok(StepOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::config::PipelineConfig;
    use crate::pipeline::context::test_support::{mock_context, WORK_DIR};
    use crate::process::MockCommandRunner;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_writes_package_json() {
        let (context, fs, _) = mock_context(MockCommandRunner::new(), PipelineConfig::new(), true);

        let outcome = WriteManifestStep.execute(&context).await.unwrap();

        assert_eq!(outcome, StepOutcome::Done);
        let written = fs.content_of(PathBuf::from(WORK_DIR).join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["name"], "foo");
        assert_eq!(value["keywords"], serde_json::json!(["x", "y"]));
        assert_eq!(value["repository"]["url"], "");
    }

    #[tokio::test]
    async fn test_reserved_folder_skips_write() {
        let (context, fs, _) = mock_context(MockCommandRunner::new(), PipelineConfig::new(), false);

        let outcome = WriteManifestStep.execute(&context).await.unwrap();

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert!(fs.written_paths().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure() {
        let (mut context, _, _) =
            mock_context(MockCommandRunner::new(), PipelineConfig::new(), true);
        context.work_dir = PathBuf::from("/does/not/exist");

        let err = WriteManifestStep.execute(&context).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::WriteFailed { .. }));
    }
}
