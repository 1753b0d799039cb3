//! Remote origin lookup from the local git configuration

use crate::fs::FileSystem;
use anyhow::{anyhow, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Location of the git config, relative to the project directory
pub const GIT_CONFIG_PATH: &str = ".git/config";

/// First `url = ...` value in a git config file
pub fn parse_origin_url(config: &str) -> Option<String> {
    let url_re = Regex::new(r"url = (.+)").expect("valid regex");
    url_re
        .captures(config)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim_end().to_string())
}

fn read_origin_url(work_dir: &Path, fs: &dyn FileSystem) -> Result<String> {
    let path = fs.join(work_dir, GIT_CONFIG_PATH);
    let config = fs.read_to_string(&path)?;
    parse_origin_url(&config).ok_or_else(|| anyhow!("No 'url = ' entry in {}", path.display()))
}

/// Origin URL for the repository in `work_dir`, or an empty string when there
/// is no git config or it has no url entry. Failures are logged, never raised.
pub fn lookup_origin_url(work_dir: &Path, fs: &dyn FileSystem) -> String {
    match read_origin_url(work_dir, fs) {
        Ok(url) => {
            debug!(url = %url, "Found repository origin");
            url
        }
        Err(e) => {
            warn!(error = %e, "Could not determine repository origin, leaving it empty");
            String::new()
        }
    }
}
