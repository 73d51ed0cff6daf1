//! Immutable request specifications.
//!
//! A [`RequestSpec`] describes one desired HTTP call. It is pure data: the
//! dispatcher reads it but never mutates it, and the same spec value is
//! handed back alongside the response it produced.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error_handling::SpecError;

/// HTTP method supported by the dispatcher.
///
/// Anything outside this set is rejected at construction time; the dispatch
/// path never sees an unknown method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// GET request, no body.
    #[default]
    #[serde(rename = "GET")]
    Get,
    /// POST request, body form-encoded or JSON depending on the spec.
    #[serde(rename = "POST")]
    Post,
}

impl Method {
    /// Canonical uppercase name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one HTTP call to be made.
///
/// Construct programmatically with [`RequestSpec::new`] (defaults for every
/// optional field) or strictly from a structured record with
/// [`RequestSpec::from_value`]. Equality and hashing are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Target URL.
    pub url: String,
    /// Per-spec headers. Highest precedence on key collision: they override
    /// both the batch-wide extra headers and the identification headers.
    pub headers: BTreeMap<String, String>,
    /// Cookies sent with the request, rendered into a `Cookie` header.
    pub cookies: BTreeMap<String, String>,
    /// POST body fields. Ignored for GET.
    pub body: BTreeMap<String, String>,
    /// HTTP method.
    pub method: Method,
    /// When true and the method is POST, `body` is serialized as JSON rather
    /// than form-encoded.
    #[serde(rename = "json")]
    pub json_body: bool,
    /// Whether redirects are followed (recording each hop in the response's
    /// history).
    #[serde(rename = "redirect")]
    pub follow_redirects: bool,
    /// Timeout in seconds for the entire exchange.
    #[serde(rename = "timeout")]
    pub timeout_secs: u64,
    /// Caller-assigned correlation token, opaque to the dispatcher.
    pub id: String,
}

impl RequestSpec {
    /// Creates a GET spec for `url` with default settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            cookies: BTreeMap::new(),
            body: BTreeMap::new(),
            method: Method::Get,
            json_body: false,
            follow_redirects: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            id: String::new(),
        }
    }

    /// Deserializes a spec from a structured record.
    ///
    /// All fields must be present (record form, e.g. persisted batches) and
    /// the method must be `GET` or `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::MalformedSpec`] if a field is missing, the method
    /// is unsupported, or the URL is empty.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SpecError> {
        let spec: RequestSpec =
            serde_json::from_value(value).map_err(|e| SpecError::MalformedSpec(e.to_string()))?;
        if spec.url.is_empty() {
            return Err(SpecError::MalformedSpec("url must not be empty".into()));
        }
        Ok(spec)
    }
}

/// Renders a cookie map into a `Cookie` header value (`"a=1; b=2"`).
pub(crate) fn cookie_header_value(cookies: &BTreeMap<String, String>) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> serde_json::Value {
        json!({
            "url": "https://example.com/login",
            "headers": {"X-Probe": "1"},
            "cookies": {"session": "abc"},
            "body": {"user": "admin"},
            "method": "POST",
            "json": true,
            "redirect": false,
            "timeout": 3,
            "id": "login-1"
        })
    }

    #[test]
    fn test_new_defaults() {
        let spec = RequestSpec::new("https://example.com");
        assert_eq!(spec.url, "https://example.com");
        assert_eq!(spec.method, Method::Get);
        assert!(!spec.json_body);
        assert!(spec.follow_redirects);
        assert_eq!(spec.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(spec.headers.is_empty());
        assert!(spec.id.is_empty());
    }

    #[test]
    fn test_from_value_complete_record() {
        let spec = RequestSpec::from_value(full_record()).unwrap();
        assert_eq!(spec.method, Method::Post);
        assert!(spec.json_body);
        assert!(!spec.follow_redirects);
        assert_eq!(spec.timeout_secs, 3);
        assert_eq!(spec.id, "login-1");
        assert_eq!(spec.cookies.get("session").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_from_value_missing_field() {
        let mut record = full_record();
        record.as_object_mut().unwrap().remove("timeout");
        let err = RequestSpec::from_value(record).unwrap_err();
        assert!(matches!(err, SpecError::MalformedSpec(_)));
    }

    #[test]
    fn test_from_value_unsupported_method() {
        let mut record = full_record();
        record["method"] = json!("DELETE");
        let err = RequestSpec::from_value(record).unwrap_err();
        assert!(matches!(err, SpecError::MalformedSpec(_)));
    }

    #[test]
    fn test_from_value_empty_url() {
        let mut record = full_record();
        record["url"] = json!("");
        let err = RequestSpec::from_value(record).unwrap_err();
        assert!(matches!(err, SpecError::MalformedSpec(_)));
    }

    #[test]
    fn test_value_equality_and_hash() {
        use std::collections::HashSet;
        let a = RequestSpec::from_value(full_record()).unwrap();
        let b = RequestSpec::from_value(full_record()).unwrap();
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_cookie_header_value() {
        let mut cookies = BTreeMap::new();
        cookies.insert("b".to_string(), "2".to_string());
        cookies.insert("a".to_string(), "1".to_string());
        assert_eq!(cookie_header_value(&cookies), "a=1; b=2");
        assert_eq!(cookie_header_value(&BTreeMap::new()), "");
    }
}
