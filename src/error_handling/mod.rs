//! Error handling and batch failure statistics.
//!
//! This module provides:
//! - Error type definitions (spec validation, options validation, body
//!   parsing, initialization)
//! - The contained-failure taxonomy and its categorization from transport
//!   errors
//! - Thread-safe failure counters for a dispatched batch

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::DispatchStats;
pub use types::{BodyError, DispatchError, ErrorType, InitializationError, SpecError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dispatch_stats_initialization() {
        let stats = DispatchStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get(error_type), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_dispatch_stats_increment() {
        let stats = DispatchStats::new();
        stats.increment(ErrorType::Timeout);
        stats.increment(ErrorType::Timeout);
        stats.increment(ErrorType::Connect);
        assert_eq!(stats.get(ErrorType::Timeout), 2);
        assert_eq!(stats.get(ErrorType::Connect), 1);
        assert_eq!(stats.total(), 3);
    }
}
