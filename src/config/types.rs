//! Dispatch option types.

use std::collections::BTreeMap;

use crate::config::constants::DEFAULT_MAX_CONCURRENCY;

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options applied to a whole batch of requests.
///
/// # Examples
///
/// ```
/// use request_fanout::DispatchOptions;
///
/// let options = DispatchOptions {
///     max_concurrency: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Maximum number of requests in flight at any instant. Must be positive.
    pub max_concurrency: usize,

    /// Optional upstream proxy address applied uniformly to the batch.
    pub proxy: Option<String>,

    /// Headers merged into every request. Lowest precedence: identification
    /// headers and each spec's own headers override them on key collision.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            proxy: None,
            extra_headers: BTreeMap::new(),
        }
    }
}
