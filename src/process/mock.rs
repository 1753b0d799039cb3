use super::{CommandOutcome, CommandRunner, CommandSpec, OutputSink};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Records every invocation and answers with a scripted exit code per program
/// (0 unless configured otherwise) after emitting any scripted output lines.
#[derive(Default)]
pub struct MockCommandRunner {
    exit_codes: Mutex<HashMap<String, i32>>,
    output: Mutex<HashMap<String, Vec<String>>>,
    unavailable: Mutex<Vec<String>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(self, program: &str, code: i32) -> Self {
        self.exit_codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(program.to_string(), code);
        self
    }

    /// Lines `program` prints to stdout when run
    pub fn with_output(self, program: &str, line: &str) -> Self {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(program.to_string())
            .or_default()
            .push(line.to_string());
        self
    }

    /// Make `program` fail to spawn, as if it were not installed
    pub fn with_missing_program(self, program: &str) -> Self {
        self.unavailable
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &CommandSpec, output: &OutputSink) -> Result<CommandOutcome> {
        self.calls
            .lock()
            .map_err(|e| anyhow!("{}", e))?
            .push(command.clone());

        let missing = self
            .unavailable
            .lock()
            .map_err(|e| anyhow!("{}", e))?
            .contains(&command.program);
        if missing {
            return Err(anyhow!("Failed to spawn {}", command.program));
        }

        let lines = self
            .output
            .lock()
            .map_err(|e| anyhow!("{}", e))?
            .get(&command.program)
            .cloned()
            .unwrap_or_default();
        for line in lines {
            output.program(line);
        }

        let code = self
            .exit_codes
            .lock()
            .map_err(|e| anyhow!("{}", e))?
            .get(&command.program)
            .copied()
            .unwrap_or(0);
        Ok(CommandOutcome::from_code(code))
    }
}
