//! request_fanout: bounded-concurrency HTTP batch dispatch.
//!
//! This library takes a batch of independently configured HTTP requests,
//! issues them concurrently under a global admission cap, and returns a
//! normalized, queryable model of every response that arrived. A request
//! that fails (connection refused, TLS failure, timeout, unreadable body)
//! is silently absent from the result and never aborts its siblings;
//! callers that need to detect absences correlate via [`RequestSpec::id`](RequestSpec).
//!
//! # Example
//!
//! ```no_run
//! use request_fanout::{dispatch, DispatchOptions, RequestSpec};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let specs = vec![
//!     RequestSpec::new("https://example.com/health"),
//!     RequestSpec::new("https://example.com/login"),
//! ];
//!
//! let results = dispatch(&specs, &DispatchOptions::default()).await?;
//! for (spec, response) in &results {
//!     println!("{} -> {}", spec.url, response.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dispatch;
mod error_handling;
pub mod initialization;
mod request;
mod response;

// Re-export public API
pub use config::{DispatchOptions, LogFormat};
pub use dispatch::dispatch;
pub use error_handling::{BodyError, DispatchError, InitializationError, SpecError};
pub use request::{Method, RequestSpec};
pub use response::ResponseModel;
