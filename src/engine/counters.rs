use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts for various things which count, roughly.
///
/// Counts are atomic so an engine may answer queries through a shared reference.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of every query answered.
    queries: AtomicUsize,

    /// A count of every assignment on which the knowledge base was evaluated.
    assignments: AtomicUsize,
}

impl Counters {
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    pub fn assignments(&self) -> usize {
        self.assignments.load(Ordering::Relaxed)
    }

    pub(crate) fn note_query(&self, assignments: usize) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.assignments.fetch_add(assignments, Ordering::Relaxed);
    }
}
