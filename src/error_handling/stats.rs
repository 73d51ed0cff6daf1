//! Batch failure statistics tracking.
//!
//! Failed requests are dropped from the dispatch result, so these counters
//! are the only record of what went wrong across a batch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe per-batch failure counters.
///
/// One counter per [`ErrorType`], all initialized to zero. Shared across the
/// batch's tasks behind an `Arc`.
pub struct DispatchStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl DispatchStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        DispatchStats { errors }
    }

    /// Increments the counter for `error`.
    pub fn increment(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in DispatchStats initialization.",
                error
            );
        }
    }

    /// Returns the count for `error`.
    pub fn get(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Returns the total number of contained failures across all categories.
    pub fn total(&self) -> usize {
        self.errors
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs a summary of nonzero counters at the end of a batch.
    pub fn log_summary(&self) {
        if self.total() == 0 {
            log::debug!("batch completed with no contained failures");
            return;
        }
        for error in ErrorType::iter() {
            let count = self.get(error);
            if count > 0 {
                log::info!("{:?} failures: {}", error, count);
            }
        }
    }
}

impl Default for DispatchStats {
    fn default() -> Self {
        Self::new()
    }
}
