//! Configuration management for vladmake
//!
//! Settings are loaded from environment variables with defaults. Command-line
//! flags override them (see [`crate::cli`]).
//!
//! # Environment Variables
//!
//! - `VLADMAKE_LOG_LEVEL`: Logging level - default: "warn"
//! - `VLADMAKE_LOG_JSON`: Emit JSON logs (true|false) - default: "false"
//! - `VLADMAKE_TEMPLATES_DIR`: Template directory - default: `<exe dir>/../templates`
//! - `VLADMAKE_INSTALLER`: Dependency installer program - default: "npm"
//!
//! # Example
//!
//! ```no_run
//! use vladmake::ScaffoldConfig;
//!
//! let config = ScaffoldConfig::default().with_skip_install(true);
//! config.validate().expect("Invalid configuration");
//! let pipeline = config.pipeline_config().expect("templates dir");
//! assert!(pipeline.skip_install);
//! ```

use crate::pipeline::config::{PipelineConfig, DEFAULT_INSTALLER};
use crate::util::logging::{parse_level, LoggingConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_LOG_JSON: bool = false;

/// Template directory name, resolved next to the installed binary
pub const TEMPLATES_DIR_NAME: &str = "templates";

pub const ENV_LOG_LEVEL: &str = "VLADMAKE_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "VLADMAKE_LOG_JSON";
pub const ENV_TEMPLATES_DIR: &str = "VLADMAKE_TEMPLATES_DIR";
pub const ENV_INSTALLER: &str = "VLADMAKE_INSTALLER";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// No template directory configured and none could be derived
    #[error("Cannot locate template directory: {0}")]
    TemplatesNotFound(String),
}

/// Main configuration structure for vladmake
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON logs
    pub log_json: bool,

    /// Template directory; derived from the executable location when unset
    pub templates_dir: Option<PathBuf>,

    /// Program used as `<installer> i -D <deps>`
    pub installer: String,

    /// Skip dependency installation entirely
    pub skip_install: bool,
}

impl Default for ScaffoldConfig {
    /// Loads from `VLADMAKE_*` environment variables, falling back to defaults
    fn default() -> Self {
        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(ENV_LOG_JSON)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        let templates_dir = env::var(ENV_TEMPLATES_DIR)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let installer = env::var(ENV_INSTALLER)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INSTALLER.to_string());

        Self {
            log_level,
            log_json,
            templates_dir,
            installer,
            skip_install: false,
        }
    }
}

impl ScaffoldConfig {
    pub fn with_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(templates_dir.into());
        self
    }

    pub fn with_installer(mut self, installer: impl Into<String>) -> Self {
        self.installer = installer.into();
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into().to_lowercase();
        self
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown log level or an empty installer name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        if self.installer.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Installer program cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Subscriber settings for this configuration. Trace level adds source
    /// locations; JSON output adds thread ids.
    pub fn logging_config(&self) -> LoggingConfig {
        let level = parse_level(&self.log_level).unwrap_or(Level::WARN);
        LoggingConfig {
            level,
            use_json: self.log_json,
            include_location: level == Level::TRACE,
            include_thread_ids: self.log_json,
            ..Default::default()
        }
    }

    /// The configured template directory, or `<exe dir>/../templates`
    pub fn resolve_templates_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.templates_dir {
            return Ok(dir.clone());
        }

        let exe = env::current_exe()
            .map_err(|e| ConfigError::TemplatesNotFound(e.to_string()))?;
        let bin_dir = exe.parent().ok_or_else(|| {
            ConfigError::TemplatesNotFound(format!("{} has no parent", exe.display()))
        })?;

        Ok(bin_dir.join("..").join(TEMPLATES_DIR_NAME))
    }

    /// Settings consumed by the scaffold pipeline
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        Ok(PipelineConfig::new()
            .with_installer(self.installer.clone())
            .with_templates_dir(self.resolve_templates_dir()?)
            .with_skip_install(self.skip_install))
    }
}

impl fmt::Display for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vladmake Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        match &self.templates_dir {
            Some(dir) => writeln!(f, "  Templates Dir: {}", dir.display())?,
            None => writeln!(f, "  Templates Dir: <next to executable>")?,
        }
        writeln!(f, "  Installer: {}", self.installer)?;
        writeln!(f, "  Skip Install: {}", self.skip_install)?;
        Ok(())
    }
}
