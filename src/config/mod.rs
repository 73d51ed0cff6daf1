//! Configuration for batch dispatch.
//!
//! This module provides:
//! - Configuration constants (concurrency cap, timeouts, redirect limits)
//! - Fixed identification header constants
//! - Dispatch option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{DispatchOptions, LogFormat};
