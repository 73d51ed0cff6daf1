//! Conversion from transport responses to [`ResponseModel`].

use std::time::Instant;

use reqwest::header::HeaderMap;

use super::ResponseModel;

/// Maps one completed transport response into a [`ResponseModel`].
///
/// The body is read here with best-effort decoding: invalid byte sequences
/// are replaced, and a body that cannot be read at all (aborted connection,
/// protocol violation) becomes the empty string rather than an error.
///
/// `start` is the instant the exchange was initiated, before the first dial;
/// `response_time` is measured once this response's data has finished
/// arriving. Intermediate redirect responses are mapped with an empty
/// `history`, so the chain on the final response is flat by construction.
pub(crate) async fn map_response(
    response: reqwest::Response,
    method: &str,
    start: Instant,
    history: Vec<ResponseModel>,
) -> ResponseModel {
    let url = response.url().to_string();
    let status = response.status().as_u16();
    let headers = flatten_headers(response.headers());

    let text = match response.bytes().await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::debug!("failed to read response body for {url}: {e}");
            String::new()
        }
    };
    let response_time = start.elapsed().as_secs_f64();

    ResponseModel {
        url,
        method: method.to_string(),
        status,
        text,
        headers,
        response_time,
        history,
    }
}

/// Flattens a `HeaderMap` into ordered `(name, value)` pairs.
///
/// Repeated headers yield one pair per occurrence, in arrival order. Names
/// are stored as the transport presents them (lowercased on the wire for
/// HTTP/2); values with non-UTF-8 bytes are decoded lossily.
fn flatten_headers(map: &HeaderMap) -> Vec<(String, String)> {
    let mut headers = Vec::with_capacity(map.len());
    for (name, value) in map.iter() {
        headers.push((
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        ));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn test_flatten_headers_keeps_repeated_instances_in_order() {
        let mut map = HeaderMap::new();
        let set_cookie = HeaderName::from_static("set-cookie");
        map.append(set_cookie.clone(), HeaderValue::from_static("a=1"));
        map.append(
            HeaderName::from_static("server"),
            HeaderValue::from_static("nginx"),
        );
        map.append(set_cookie, HeaderValue::from_static("b=2"));

        let flat = flatten_headers(&map);
        let cookies: Vec<&str> = flat
            .iter()
            .filter(|(name, _)| name == "set-cookie")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(cookies, vec!["a=1", "b=2"]);
        assert!(flat.iter().any(|(name, value)| name == "server" && value == "nginx"));
    }

    #[test]
    fn test_flatten_headers_lossy_value_decoding() {
        let mut map = HeaderMap::new();
        map.append(
            HeaderName::from_static("x-raw"),
            HeaderValue::from_bytes(&[0x61, 0xff, 0x62]).unwrap(),
        );
        let flat = flatten_headers(&map);
        assert_eq!(flat[0].0, "x-raw");
        assert_eq!(flat[0].1, "a\u{fffd}b");
    }
}
