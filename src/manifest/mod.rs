//! Project descriptor (package.json) and readme generation

pub mod builder;
pub mod descriptor;
pub mod origin;
pub mod readme;

pub use builder::{ManifestBuilder, PreparedManifest, MANIFEST_FILE, RESERVED_FOLDER_NAME};
pub use descriptor::{normalize_keywords, ProjectDescriptor, Repository, Scripts};
pub use origin::{lookup_origin_url, parse_origin_url, GIT_CONFIG_PATH};
pub use readme::{render_readme, README_FILE};
