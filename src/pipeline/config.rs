use std::path::PathBuf;

/// Development tooling installed into every new project
pub const DEV_DEPENDENCIES: &[&str] = &[
    "@types/jest",
    "@types/node",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "eslint",
    "eslint-config-prettier",
    "eslint-plugin-jest",
    "eslint-plugin-prettier",
    "eslint-plugin-promise",
    "jest",
    "prettier",
    "ts-jest",
    "ts-loader",
    "typescript",
    "shieldgen",
];

pub const DEFAULT_INSTALLER: &str = "npm";
pub const COPY_PROGRAM: &str = "cp";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub installer: String,
    pub dev_dependencies: Vec<String>,
    pub templates_dir: PathBuf,
    pub skip_install: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            installer: DEFAULT_INSTALLER.to_string(),
            dev_dependencies: DEV_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            templates_dir: PathBuf::from("templates"),
            skip_install: false,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installer(mut self, installer: impl Into<String>) -> Self {
        self.installer = installer.into();
        self
    }

    pub fn with_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = templates_dir.into();
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }
}
