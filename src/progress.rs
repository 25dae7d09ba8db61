// src/progress.rs
/// Progress reporting for a manifest build.
/// The CLI implements this to print status; library callers can ignore it.
pub trait Progress {
    /// Called once scanning is done, with the number of candidate files.
    fn begin(&mut self, _total: usize) {}

    /// A candidate without a year prefix was left out.
    fn skipped(&mut self, _path: &str) {}

    /// A candidate was folded into the manifest.
    fn item_done(&mut self, _path: &str) {}

    /// Called at the end of aggregation.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
