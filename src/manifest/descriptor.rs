use serde::{Deserialize, Serialize};
use std::fmt;

pub const ENTRY_POINT: &str = "dist/index.js";
pub const INITIAL_VERSION: &str = "1.0.0";
pub const TEST_SCRIPT: &str = "jest --json --outputFile coverage/testResults.json && shieldgen";
pub const REPOSITORY_TYPE: &str = "git";

/// The generated `package.json`. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub main: String,
    pub version: String,
    pub scripts: Scripts,
    pub repository: Repository,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub test: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            test: TEST_SCRIPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Repository {
    pub fn git(url: impl Into<String>) -> Self {
        Self {
            kind: REPOSITORY_TYPE.to_string(),
            url: url.into(),
        }
    }
}

impl ProjectDescriptor {
    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name:        {}", self.name)?;
        writeln!(f, "description: {}", self.description)?;
        writeln!(f, "keywords:    [{}]", self.keywords.join(", "))?;
        writeln!(f, "author:      {}", self.author)?;
        writeln!(f, "license:     {}", self.license)?;
        writeln!(f, "main:        {}", self.main)?;
        writeln!(f, "version:     {}", self.version)?;
        writeln!(f, "test:        {}", self.scripts.test)?;
        write!(f, "repository:  {}", self.repository.url)
    }
}

/// Split on commas, trim, drop duplicates (first occurrence wins) and empties
pub fn normalize_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim) {
        if keyword.is_empty() || keywords.iter().any(|k| k == keyword) {
            continue;
        }
        keywords.push(keyword.to_string());
    }
    keywords
}
