// src/progress.rs
/// Lightweight progress reporting used by long-running operations (page and school fetches).
/// The CLI implements this to surface status to users.
pub trait Progress {
    /// Called once the school list is known, with the number of schools to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One school yielded both eligibility and enrollment.
    fn item_done(&mut self, _index: usize, _link: &str) {}

    /// One school is missing data; `reason` says which part.
    fn item_skipped(&mut self, _index: usize, _link: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
