//! Terminal text shown around the prompt session
//!
//! Every formatter returns a `String` so the handler decides where it goes.
//! Colour is applied only when `styled` is set, which the handler derives from
//! whether stdout is a terminal.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::manifest::ProjectDescriptor;
use crate::process::OutputLine;

pub struct OutputFormatter {
    styled: bool,
}

impl OutputFormatter {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Formatter that colours output only when stdout is a terminal
    pub fn for_stdout() -> Self {
        Self::new(atty::is(atty::Stream::Stdout))
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Two dim lines followed by a blank line before the first prompt
    pub fn banner(&self) -> String {
        let lines = [
            "Specify project details".to_string(),
            "Press ^C at any time to quit".to_string(),
        ];
        let lines: Vec<String> = if self.styled {
            lines.iter().map(|l| l.as_str().bright_black().to_string()).collect()
        } else {
            lines.to_vec()
        };
        format!("{}\n\n", lines.join("\n"))
    }

    /// Pretty JSON of the descriptor, newline-terminated
    pub fn descriptor(&self, descriptor: &ProjectDescriptor) -> Result<String> {
        let json = descriptor
            .to_json()
            .context("Failed to serialize project descriptor to JSON")?;
        Ok(format!("{}\n", json))
    }

    /// A newline-terminated line of step output. Status messages are
    /// highlighted; child process output passes through untouched.
    pub fn step_output(&self, line: &OutputLine) -> String {
        match line {
            OutputLine::Status(text) if self.styled => {
                format!("{}\n", text.bright_green().bold())
            }
            OutputLine::Status(text) | OutputLine::Program(text) => format!("{}\n", text),
        }
    }

    pub fn finished(&self) -> String {
        let text = "All done!!!  Have fun.";
        if self.styled {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn failure(&self, help: &str) -> String {
        if self.styled {
            help.red().to_string()
        } else {
            help.to_string()
        }
    }
}
