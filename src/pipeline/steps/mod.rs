// Scaffold steps, run in file order by the orchestrator. Each step is gated on
// the previous one succeeding.

#[path = "01_manifest.rs"]
pub mod manifest;
#[path = "02_install.rs"]
pub mod install;
#[path = "03_readme.rs"]
pub mod readme;
#[path = "04_templates.rs"]
pub mod templates;

pub use install::InstallDependenciesStep;
pub use manifest::WriteManifestStep;
pub use readme::WriteReadmeStep;
pub use templates::CopyTemplatesStep;
