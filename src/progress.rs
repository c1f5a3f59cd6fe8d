// src/progress.rs
use crate::extract::Category;

/// Lightweight progress reporting for one scrape request (fetch, then each category).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps (fetch + categories).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The document is fetched and parsed.
    fn fetched(&mut self, _url: &str) {}

    /// One category finished with `count` items.
    fn category_done(&mut self, _category: Category, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
