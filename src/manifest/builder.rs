use super::descriptor::{
    normalize_keywords, ProjectDescriptor, Repository, Scripts, ENTRY_POINT, INITIAL_VERSION,
};
use super::origin::lookup_origin_url;
use crate::fs::FileSystem;
use crate::prompt::AnswerSet;
use std::path::Path;
use tracing::{info, warn};

pub const MANIFEST_FILE: &str = "package.json";

/// Running inside a folder with this name means we are in the scaffolder's
/// own checkout; the manifest is shown but never written there.
pub const RESERVED_FOLDER_NAME: &str = env!("CARGO_PKG_NAME");

/// Descriptor plus the decision whether it may be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedManifest {
    pub descriptor: ProjectDescriptor,
    pub write_to_disk: bool,
}

#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    reserved_name: String,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            reserved_name: RESERVED_FOLDER_NAME.to_string(),
        }
    }

    pub fn with_reserved_name(reserved_name: impl Into<String>) -> Self {
        Self {
            reserved_name: reserved_name.into(),
        }
    }

    pub fn reserved_name(&self) -> &str {
        &self.reserved_name
    }

    /// Build the descriptor from a complete answer set and an origin URL
    /// (empty when unknown)
    pub fn build(&self, answers: &AnswerSet, origin_url: &str) -> ProjectDescriptor {
        ProjectDescriptor {
            name: answers.name().to_string(),
            description: answers.description().to_string(),
            keywords: normalize_keywords(answers.keywords()),
            author: answers.author().to_string(),
            license: answers.license().to_string(),
            main: ENTRY_POINT.to_string(),
            version: INITIAL_VERSION.to_string(),
            scripts: Scripts::default(),
            repository: Repository::git(origin_url),
        }
    }

    pub fn should_write(&self, folder_name: &str) -> bool {
        folder_name != self.reserved_name
    }

    /// Look up the origin in `work_dir` and build the descriptor
    pub fn prepare(
        &self,
        answers: &AnswerSet,
        work_dir: &Path,
        folder_name: &str,
        fs: &dyn FileSystem,
    ) -> PreparedManifest {
        let origin = lookup_origin_url(work_dir, fs);
        let descriptor = self.build(answers, &origin);
        let write_to_disk = self.should_write(folder_name);

        if write_to_disk {
            info!(name = %descriptor.name, "Manifest prepared");
        } else {
            warn!(
                folder = folder_name,
                "Working folder is the scaffolder itself, manifest will not be written"
            );
        }

        PreparedManifest {
            descriptor,
            write_to_disk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    fn answers() -> AnswerSet {
        ["foo", "bar", "x,y", "me", "MIT"].into_iter().collect()
    }

    #[test]
    fn test_build_without_git_config() {
        let fs = MockFileSystem::with_root(PathBuf::from("/work/foo"));
        let prepared = ManifestBuilder::new().prepare(&answers(), fs.root(), "foo", &fs);

        assert_eq!(prepared.descriptor.repository.url, "");
        assert_eq!(prepared.descriptor.keywords, vec!["x", "y"]);
        assert!(prepared.write_to_disk);
    }

    #[test]
    fn test_build_with_git_config() {
        let fs = MockFileSystem::with_root(PathBuf::from("/work/foo"));
        fs.add_file(".git/config", "[remote \"origin\"]\n\turl = git@host:me/foo.git\n");

        let prepared = ManifestBuilder::new().prepare(&answers(), fs.root(), "foo", &fs);
        assert_eq!(prepared.descriptor.repository.url, "git@host:me/foo.git");
        assert_eq!(prepared.descriptor.repository.kind, "git");
    }

    #[test]
    fn test_fixed_fields() {
        let descriptor = ManifestBuilder::new().build(&answers(), "");

        assert_eq!(descriptor.name, "foo");
        assert_eq!(descriptor.description, "bar");
        assert_eq!(descriptor.author, "me");
        assert_eq!(descriptor.license, "MIT");
        assert_eq!(descriptor.main, "dist/index.js");
        assert_eq!(descriptor.version, "1.0.0");
        assert_eq!(
            descriptor.scripts.test,
            "jest --json --outputFile coverage/testResults.json && shieldgen"
        );
    }

    #[test]
    fn test_reserved_folder_is_not_written() {
        let fs = MockFileSystem::with_root(PathBuf::from("/src/vladmake"));
        let builder = ManifestBuilder::new();
        let prepared = builder.prepare(&answers(), fs.root(), RESERVED_FOLDER_NAME, &fs);

        assert_eq!(builder.reserved_name(), "vladmake");
        assert!(!prepared.write_to_disk);
        assert_eq!(prepared.descriptor.name, "foo");
        assert!(fs.written_paths().is_empty());
    }

    #[test]
    fn test_custom_reserved_name() {
        let builder = ManifestBuilder::with_reserved_name("tooling");
        assert!(!builder.should_write("tooling"));
        assert!(builder.should_write("vladmake"));
    }
}
