//! Recent check history
//!
//! Holds the last N classified checks, newest first, for the lifetime of the
//! process. Entries are never modified once recorded; the oldest entry is
//! evicted when a push would exceed capacity.

mod service;
pub use service::IntakeService;

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::triage::CheckResult;

pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug)]
pub struct HistoryBuffer {
    entries: Mutex<VecDeque<CheckResult>>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        HistoryBuffer {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Record a result as the newest entry.
    pub fn push(&self, result: CheckResult) {
        let mut entries = self.lock();
        entries.push_front(result);
        entries.truncate(self.capacity);
    }

    /// Copy of all held entries, newest first.
    pub fn snapshot(&self) -> Vec<CheckResult> {
        self.lock().iter().cloned().collect()
    }

    // Every critical section leaves the deque consistent, so a poisoned lock
    // is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<CheckResult>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        HistoryBuffer::new(DEFAULT_CAPACITY)
    }
}
