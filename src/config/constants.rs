//! Configuration constants.

/// Default maximum number of requests in flight at once (semaphore limit).
pub const DEFAULT_MAX_CONCURRENCY: usize = 200;

/// Default per-request timeout in seconds.
///
/// The timeout bounds the entire exchange: connection establishment, header
/// transfer, body read, and any redirect hops.
pub const DEFAULT_TIMEOUT_SECS: u64 = 7;

/// Maximum number of redirect hops followed for a single request.
///
/// When the limit is reached the last response is returned as final, even if
/// it is itself a redirect.
pub const MAX_REDIRECT_HOPS: usize = 10;
