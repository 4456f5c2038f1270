// src/progress.rs
/// Milestone reporting for the pipeline (gathering, sorting, writing).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}
}

/// Collects messages; handy for checking what a run announced.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub messages: Vec<String>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.messages.push(s!(msg));
    }
}
