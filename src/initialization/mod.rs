//! Shared resource setup.
//!
//! This module provides functions to initialize the resources a batch shares:
//! - The HTTP client (TLS verification disabled, redirects handled manually)
//! - The admission semaphore bounding in-flight requests
//! - The logger

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the admission semaphore for controlling concurrency.
///
/// Each unit of work acquires one permit before dialing and holds it until
/// its exchange finishes, bounding the number of requests in flight to
/// `count` at any instant.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
