// src/progress.rs
/// Lightweight progress reporting for long-running operations (batch scrape).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One course page was fetched and parsed.
    fn item_done(&mut self, _course_id: u32) {}

    /// One course page could not be fetched; the batch goes on without it.
    fn item_failed(&mut self, _course_id: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
