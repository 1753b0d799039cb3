//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { work_dir } => {
                info!(work_dir = %work_dir, "Starting scaffold");
            }
            ProgressEvent::StepStarted { step } => {
                debug!(step = %step, "Starting step");
            }
            ProgressEvent::StepComplete { step, duration } => {
                info!(
                    step = %step,
                    duration_ms = duration.as_millis(),
                    "Step complete"
                );
            }
            ProgressEvent::StepSkipped { step, reason } => {
                info!(step = %step, reason = %reason, "Step skipped");
            }
            ProgressEvent::Completed { steps, total_time } => {
                info!(
                    steps,
                    total_time_ms = total_time.as_millis(),
                    "Scaffold complete"
                );
            }
            ProgressEvent::Failed { step, error } => {
                error!(step = %step, error = %error, "Scaffold failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_handler_handles_every_event() {
        let handler = LoggingHandler;
        let events = [
            ProgressEvent::Started {
                work_dir: "/w".to_string(),
            },
            ProgressEvent::StepStarted {
                step: "manifest".to_string(),
            },
            ProgressEvent::StepComplete {
                step: "manifest".to_string(),
                duration: Duration::from_millis(3),
            },
            ProgressEvent::StepSkipped {
                step: "install".to_string(),
                reason: "disabled".to_string(),
            },
            ProgressEvent::Failed {
                step: "copy".to_string(),
                error: "exit 1".to_string(),
            },
            ProgressEvent::Completed {
                steps: 4,
                total_time: Duration::from_secs(1),
            },
        ];
        for event in &events {
            handler.on_progress(event);
        }
    }
}
