// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for batch conversion.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of documents found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One document converted and written.
    fn item_done(&mut self, _source: &Path, _output: &Path) {}

    /// One document failed; the batch goes on.
    fn item_failed(&mut self, _source: &Path, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
