//! Pipeline context shared by every scaffold step

use std::path::PathBuf;
use std::sync::Arc;

use crate::fs::FileSystem;
use crate::manifest::PreparedManifest;
use crate::process::{CommandRunner, OutputSink};

use super::config::PipelineConfig;

/// Everything a step needs: collaborators, settings and the manifest to emit
pub struct ScaffoldContext {
    /// File system abstraction
    pub file_system: Arc<dyn FileSystem>,

    /// Runs the installer and the template copy
    pub runner: Arc<dyn CommandRunner>,

    /// Pipeline configuration
    pub config: PipelineConfig,

    /// Directory being scaffolded
    pub work_dir: PathBuf,

    /// Descriptor built from the answers
    pub manifest: PreparedManifest,

    /// Status messages and child process output
    pub output: OutputSink,
}

impl ScaffoldContext {
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
        config: PipelineConfig,
        work_dir: PathBuf,
        manifest: PreparedManifest,
    ) -> Self {
        Self {
            file_system,
            runner,
            config,
            work_dir,
            manifest,
            output: OutputSink::discard(),
        }
    }

    pub fn with_output(mut self, output: OutputSink) -> Self {
        self.output = output;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::process::MockCommandRunner;

    #[test]
    fn test_context_creation() {
        let (context, _fs, _runner) =
            mock_context(MockCommandRunner::new(), PipelineConfig::default(), true);

        assert_eq!(context.work_dir, PathBuf::from(WORK_DIR));
        assert_eq!(context.manifest.descriptor.name, "foo");
        assert!(context.file_system.is_dir(&context.work_dir));
    }
}
