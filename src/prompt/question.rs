//! Question definitions for the project metadata prompts

use regex::Regex;
use std::fmt;

/// npm-style package name, optionally scoped. Cannot start with `.`, `_` or
/// whitespace and cannot contain whitespace.
pub const PACKAGE_NAME_PATTERN: &str = r"^(@.+/)?[^._\s]\S+$";

/// Any non-empty line
pub const NON_EMPTY_PATTERN: &str = r".+";

pub const DEFAULT_LICENSE: &str = "MIT";

/// Position of each field in the answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PackageName = 0,
    Description = 1,
    Keywords = 2,
    Author = 3,
    License = 4,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::PackageName,
        Field::Description,
        Field::Keywords,
        Field::Author,
        Field::License,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::PackageName => "Package Name",
            Field::Description => "Description",
            Field::Keywords => "Keywords",
            Field::Author => "Author",
            Field::License => "License",
        }
    }
}

/// One prompt: label, default (empty means none) and validation pattern
#[derive(Debug, Clone)]
pub struct Question {
    label: String,
    default: String,
    pattern: Regex,
}

impl Question {
    pub fn new(label: impl Into<String>, default: impl Into<String>, pattern: Regex) -> Self {
        Self {
            label: label.into(),
            default: default.into(),
            pattern,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Prompt line shown to the user, e.g. `Package Name (my-dir): `
    pub fn prompt_text(&self) -> String {
        if self.default.is_empty() {
            format!("{}: ", self.label)
        } else {
            format!("{} ({}): ", self.label, self.default)
        }
    }

    /// Typed line if non-empty, otherwise the default
    pub fn effective_response<'a>(&'a self, line: &'a str) -> &'a str {
        if line.is_empty() {
            &self.default
        } else {
            line
        }
    }

    pub fn accepts(&self, response: &str) -> bool {
        !response.is_empty() && self.pattern.is_match(response)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}/", self.label, self.pattern.as_str())
    }
}

/// The fixed question sequence. `folder_name` is the default package name.
pub fn project_questions(folder_name: &str) -> Vec<Question> {
    let package_name = Regex::new(PACKAGE_NAME_PATTERN).expect("valid regex");
    let non_empty = Regex::new(NON_EMPTY_PATTERN).expect("valid regex");

    Field::ALL
        .iter()
        .map(|field| match field {
            Field::PackageName => Question::new(field.label(), folder_name, package_name.clone()),
            Field::License => Question::new(field.label(), DEFAULT_LICENSE, non_empty.clone()),
            _ => Question::new(field.label(), "", non_empty.clone()),
        })
        .collect()
}
