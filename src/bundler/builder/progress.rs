//! Progress reporting contract.
//!
//! The pipeline emits `StepStarted`, zero or more `SubstepReported`, then
//! `StepCompleted` for each stage, in stage order. Rendering is left to the
//! sink.

use std::sync::Mutex;

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A stage began.
    StepStarted(String),
    /// Detail reported while a stage runs.
    SubstepReported(String),
    /// The current stage finished.
    StepCompleted(bool),
}

/// Receiver of pipeline progress.
pub trait ProgressSink {
    /// A stage began.
    fn step_started(&self, label: &str);

    /// Detail about the running stage.
    fn substep(&self, label: &str);

    /// The running stage finished.
    fn step_completed(&self, success: bool);
}

/// Forwards progress to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn step_started(&self, label: &str) {
        log::info!("{}", label);
    }

    fn substep(&self, label: &str) {
        log::info!("\t{}", label);
    }

    fn step_completed(&self, success: bool) {
        if success {
            log::info!("✓ done");
        } else {
            log::error!("✗ failed");
        }
    }
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl ProgressSink for RecordingProgress {
    fn step_started(&self, label: &str) {
        self.push(ProgressEvent::StepStarted(label.to_string()));
    }

    fn substep(&self, label: &str) {
        self.push(ProgressEvent::SubstepReported(label.to_string()));
    }

    fn step_completed(&self, success: bool) {
        self.push(ProgressEvent::StepCompleted(success));
    }
}
