//! Per-spec unit of work: request construction, manual redirect following,
//! timeout enforcement, failure containment.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE, LOCATION};
use reqwest::StatusCode;
use url::Url;

use crate::config::{IDENTIFICATION_HEADERS, MAX_REDIRECT_HOPS};
use crate::error_handling::{categorize_reqwest_error, DispatchStats, ErrorType};
use crate::request::{cookie_header_value, Method, RequestSpec};
use crate::response::{map_response, ResponseModel};

/// Runs one spec to completion under its own timeout.
///
/// Every failure is contained here: the caller only ever sees
/// present/absent. Failures are categorized into `stats` and logged at
/// debug level.
pub(crate) async fn execute(
    client: &reqwest::Client,
    spec: &RequestSpec,
    extra_headers: &BTreeMap<String, String>,
    stats: &DispatchStats,
) -> Option<ResponseModel> {
    let deadline = Duration::from_secs(spec.timeout_secs);
    match tokio::time::timeout(deadline, run_exchange(client, spec, extra_headers)).await {
        Ok(Ok(response)) => Some(response),
        Ok(Err(error)) => {
            stats.increment(categorize_reqwest_error(&error));
            debug!("request to {} failed: {error}", spec.url);
            None
        }
        Err(_) => {
            stats.increment(ErrorType::Timeout);
            debug!(
                "request to {} timed out after {}s",
                spec.url, spec.timeout_secs
            );
            None
        }
    }
}

/// Performs the exchange for one spec, following redirects manually so each
/// hop can be recorded in the final response's history.
async fn run_exchange(
    client: &reqwest::Client,
    spec: &RequestSpec,
    extra_headers: &BTreeMap<String, String>,
) -> Result<ResponseModel, reqwest::Error> {
    let headers = merged_headers(extra_headers, &spec.headers);
    let start = Instant::now();

    let mut current_url = spec.url.clone();
    let mut current_method = spec.method;
    let mut history: Vec<ResponseModel> = Vec::new();
    let mut hops = 0;

    loop {
        let mut builder = match current_method {
            Method::Get => client.get(&current_url),
            Method::Post => {
                let post = client.post(&current_url);
                if spec.json_body {
                    post.json(&spec.body)
                } else {
                    post.form(&spec.body)
                }
            }
        };
        builder = builder.headers(headers.clone());
        if !spec.cookies.is_empty() {
            builder = builder.header(COOKIE, cookie_header_value(&spec.cookies));
        }

        let response = builder.send().await?;

        let next_url = if spec.follow_redirects && hops < MAX_REDIRECT_HOPS {
            redirect_target(response.status(), response.headers(), &current_url)
        } else {
            None
        };

        match next_url {
            Some(next) => {
                debug!("following redirect from {current_url} to {next}");
                // Intermediate hops are mapped with an empty history, so the
                // chain stays flat on the final response.
                history.push(map_response(response, current_method.as_str(), start, Vec::new()).await);
                current_url = next;
                current_method = Method::Get;
                hops += 1;
            }
            None => {
                return Ok(map_response(response, current_method.as_str(), start, history).await);
            }
        }
    }
}

/// Merges the three header layers for one request, lowest to highest
/// precedence: batch-wide extra headers, fixed identification headers, the
/// spec's own headers. Later layers override earlier ones on key collision.
/// Unrepresentable names or values are skipped with a diagnostic.
fn merged_headers(
    extra_headers: &BTreeMap<String, String>,
    spec_headers: &BTreeMap<String, String>,
) -> HeaderMap {
    let mut merged = HeaderMap::new();
    let layers = extra_headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .chain(IDENTIFICATION_HEADERS.iter().copied())
        .chain(
            spec_headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );

    for (name, value) in layers {
        let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) else {
            debug!("skipping invalid header name: {name}");
            continue;
        };
        let Ok(header_value) = HeaderValue::from_str(value) else {
            debug!("skipping invalid value for header {name}");
            continue;
        };
        merged.insert(header_name, header_value);
    }
    merged
}

/// Resolves the target of a redirect response against the current URL.
///
/// Returns `None` when the response is not a redirect, carries no usable
/// `Location`, or the location cannot be resolved; the current response then
/// becomes final.
fn redirect_target(status: StatusCode, headers: &HeaderMap, current_url: &str) -> Option<String> {
    if !status.is_redirection() {
        return None;
    }
    let location = headers.get(LOCATION)?.to_str().ok()?;
    match Url::parse(location) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Url::parse(current_url)
            .and_then(|base| base.join(location))
            .map(|url| url.to_string())
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_merged_headers_spec_overrides_extra() {
        let extra = to_map(&[("X-Probe", "a"), ("X-Batch", "batch-1")]);
        let spec = to_map(&[("X-Probe", "b")]);
        let merged = merged_headers(&extra, &spec);
        assert_eq!(merged.get("X-Probe").unwrap(), "b");
        assert_eq!(merged.get("X-Batch").unwrap(), "batch-1");
    }

    #[test]
    fn test_merged_headers_identification_present_by_default() {
        let merged = merged_headers(&BTreeMap::new(), &BTreeMap::new());
        assert_eq!(merged.get("X-Bug-Bounty").unwrap(), "HackerOne-savik");
        assert_eq!(merged.get("X-HackerOne").unwrap(), "savik");
        assert_eq!(
            merged.get("ResearcherContact").unwrap(),
            "savik@wearehackerone.com"
        );
    }

    #[test]
    fn test_merged_headers_spec_overrides_identification() {
        let spec = to_map(&[("X-Bug-Bounty", "custom-program")]);
        let merged = merged_headers(&BTreeMap::new(), &spec);
        assert_eq!(merged.get("X-Bug-Bounty").unwrap(), "custom-program");
    }

    #[test]
    fn test_merged_headers_identification_overrides_extra() {
        let extra = to_map(&[("X-HackerOne", "someone-else")]);
        let merged = merged_headers(&extra, &BTreeMap::new());
        assert_eq!(merged.get("X-HackerOne").unwrap(), "savik");
    }

    #[test]
    fn test_merged_headers_skips_invalid_entries() {
        let extra = to_map(&[("bad name with spaces", "v"), ("X-Ok", "1")]);
        let merged = merged_headers(&extra, &BTreeMap::new());
        assert!(merged.get("X-Ok").is_some());
        // 3 identification headers + X-Ok
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_redirect_target_absolute_location() {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("https://other.com/next"));
        let target = redirect_target(StatusCode::FOUND, &headers, "https://example.com/start");
        assert_eq!(target.as_deref(), Some("https://other.com/next"));
    }

    #[test]
    fn test_redirect_target_relative_location() {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("/next"));
        let target = redirect_target(
            StatusCode::MOVED_PERMANENTLY,
            &headers,
            "https://example.com/old/path",
        );
        assert_eq!(target.as_deref(), Some("https://example.com/next"));
    }

    #[test]
    fn test_redirect_target_non_redirect_status() {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_static("/elsewhere"));
        assert!(redirect_target(StatusCode::OK, &headers, "https://example.com/").is_none());
    }

    #[test]
    fn test_redirect_target_missing_location() {
        let headers = HeaderMap::new();
        assert!(redirect_target(StatusCode::FOUND, &headers, "https://example.com/").is_none());
    }
}
