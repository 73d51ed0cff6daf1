//! Concurrent batch dispatch under a global admission cap.

mod fetch;

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};

use crate::config::DispatchOptions;
use crate::error_handling::{DispatchError, DispatchStats};
use crate::initialization::{init_client, init_semaphore};
use crate::request::RequestSpec;
use crate::response::ResponseModel;

/// Executes a batch of request specs concurrently and returns the pairs that
/// produced a response.
///
/// At most `options.max_concurrency` requests are in flight at any instant:
/// each unit of work acquires one permit from a shared semaphore before
/// dialing and holds it until its exchange finishes, on every exit path.
/// Each request is bounded by its own spec's timeout.
///
/// Any error raised by an individual request (connection refusal, TLS
/// failure, timeout, unreadable body) is contained: the spec is simply
/// absent from the result and its siblings are unaffected. Use
/// [`RequestSpec::id`](RequestSpec) to correlate when absence must be
/// detected. The returned pairs are a strict subsequence of `specs` in input
/// order.
///
/// The call suspends until every unit of work has finished; there is no
/// partial delivery, no retrying, and no mid-flight cancellation.
///
/// # Errors
///
/// Fails only on programmer error: a zero concurrency cap or a malformed
/// proxy address. Individual request failures never surface here.
pub async fn dispatch(
    specs: &[RequestSpec],
    options: &DispatchOptions,
) -> Result<Vec<(RequestSpec, ResponseModel)>, DispatchError> {
    if options.max_concurrency == 0 {
        return Err(DispatchError::InvalidOptions(
            "max_concurrency must be positive".to_string(),
        ));
    }
    if specs.is_empty() {
        return Ok(Vec::new());
    }

    let client = init_client(options)?;
    let semaphore = init_semaphore(options.max_concurrency);
    let stats = Arc::new(DispatchStats::new());

    debug!(
        "dispatching {} specs (cap {})",
        specs.len(),
        options.max_concurrency
    );

    let mut tasks = FuturesUnordered::new();
    for (index, spec) in specs.iter().cloned().enumerate() {
        let client = Arc::clone(&client);
        let semaphore = Arc::clone(&semaphore);
        let stats = Arc::clone(&stats);
        let extra_headers = options.extra_headers.clone();

        tasks.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (index, None),
            };
            let outcome = fetch::execute(&client, &spec, &extra_headers, &stats).await;
            (index, outcome.map(|response| (spec, response)))
        }));
    }

    // Completion order is whatever I/O readiness yields; slots keyed by
    // input index restore input order for the caller.
    let mut slots: Vec<Option<(RequestSpec, ResponseModel)>> =
        specs.iter().map(|_| None).collect();
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok((index, outcome)) => slots[index] = outcome,
            Err(join_error) => warn!("request task panicked: {join_error:?}"),
        }
    }

    stats.log_summary();

    Ok(slots.into_iter().flatten().collect())
}
