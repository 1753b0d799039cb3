//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while the scaffold pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Pipeline started in this directory
    Started { work_dir: String },

    /// A step is about to run
    StepStarted { step: String },

    /// A step finished successfully
    StepComplete { step: String, duration: Duration },

    /// A step decided not to act
    StepSkipped { step: String, reason: String },

    /// Every step finished
    Completed { steps: usize, total_time: Duration },

    /// A step failed; no further steps run
    Failed { step: String, error: String },
}

/// Trait for handling progress events during scaffolding
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            work_dir: "/test".to_string(),
        });
        handler.on_progress(&ProgressEvent::StepSkipped {
            step: "install".to_string(),
            reason: "disabled".to_string(),
        });
        handler.on_progress(&ProgressEvent::Completed {
            steps: 4,
            total_time: Duration::from_secs(5),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::StepStarted {
            step: "readme".to_string(),
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("StepStarted"));
        assert!(debug_str.contains("readme"));
    }
}
