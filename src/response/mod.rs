//! Normalized HTTP response model and query helpers.
//!
//! A [`ResponseModel`] is created exactly once by the mapper when a transport
//! exchange completes and is never mutated afterwards; every query method is
//! a pure read over the materialized fields.

mod cookies;
mod mapper;

use std::collections::HashMap;
use std::fmt;

pub(crate) use mapper::map_response;

use crate::error_handling::BodyError;

/// Normalized, immutable representation of one completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseModel {
    /// Final URL, after any redirects.
    pub url: String,
    /// Method of the final request (redirect hops are reissued as GET).
    pub method: String,
    /// Status code of the final response.
    pub status: u16,
    /// Best-effort decoded body text. Empty if the body could not be read;
    /// invalid byte sequences are replaced, never raised.
    pub text: String,
    /// Every header instance in arrival order as `(name, value)` pairs, with
    /// the name stored exactly as the transport presented it. Repeated
    /// headers (e.g. `Set-Cookie`) keep one entry per occurrence.
    pub headers: Vec<(String, String)>,
    /// Wall-clock seconds from exchange start to this response's completion.
    pub response_time: f64,
    /// Intermediate redirect responses, oldest first. Each entry's own
    /// `history` is always empty: the chain is flattened exactly one level.
    pub history: Vec<ResponseModel>,
}

impl ResponseModel {
    /// Returns every value carried by headers named `name`, in arrival
    /// order. The lookup is case-insensitive.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Returns true if `text` appears as a substring of any stored header
    /// name or header value.
    pub fn headers_contain_text(&self, text: &str, ignore_case: bool) -> bool {
        if ignore_case {
            let needle = text.to_lowercase();
            self.headers.iter().any(|(name, value)| {
                name.to_lowercase().contains(&needle) || value.to_lowercase().contains(&needle)
            })
        } else {
            self.headers
                .iter()
                .any(|(name, value)| name.contains(text) || value.contains(text))
        }
    }

    /// Returns true if `text` appears as a substring of the body.
    pub fn body_contains_text(&self, text: &str, ignore_case: bool) -> bool {
        if ignore_case {
            self.text.to_lowercase().contains(&text.to_lowercase())
        } else {
            self.text.contains(text)
        }
    }

    /// Returns true if any of `texts` appears as a substring of the body.
    pub fn body_contains_any_text(&self, texts: &[&str], ignore_case: bool) -> bool {
        texts
            .iter()
            .any(|text| self.body_contains_text(text, ignore_case))
    }

    /// Finds every occurrence of `text` in the body and returns, per match,
    /// the substring starting `n` characters before the match (clamped to the
    /// start of the body) through the end of the match.
    ///
    /// Matches are found by a left-to-right scan advancing one character at a
    /// time, so overlapping occurrences are all reported. Case-insensitive
    /// matching folds ASCII letters only, which keeps byte offsets into the
    /// original body valid.
    pub fn occurrences_with_leading_context(
        &self,
        text: &str,
        n: usize,
        ignore_case: bool,
    ) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let (haystack, needle) = if ignore_case {
            (self.text.to_ascii_lowercase(), text.to_ascii_lowercase())
        } else {
            (self.text.clone(), text.to_string())
        };

        let mut occurrences = Vec::new();
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(&needle) {
            let start = from + pos;
            let end = start + needle.len();

            let mut context_start = start;
            if n > 0 {
                for (count, (index, _)) in self.text[..start].char_indices().rev().enumerate() {
                    context_start = index;
                    if count + 1 == n {
                        break;
                    }
                }
            }
            occurrences.push(self.text[context_start..end].to_string());

            // Step one character forward so overlapping matches are found.
            from = start
                + haystack[start..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
        }
        occurrences
    }

    /// Parses every `Set-Cookie` header into a name-to-value map.
    ///
    /// Malformed entries are skipped with a debug diagnostic; on a repeated
    /// cookie name the last occurrence wins.
    pub fn cookies(&self) -> HashMap<String, String> {
        cookies::parse_set_cookie_headers(&self.headers)
    }

    /// Parses the body as JSON on demand.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::MalformedBody`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, BodyError> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

impl fmt::Display for ResponseModel {
    /// Canonical textual rendering for debugging and logging:
    /// `"HTTP/2 <status>\n<Name: value per line>\n\n<body>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers_str = self
            .headers
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "HTTP/2 {}\n{}\n\n{}", self.status, headers_str, self.text)
    }
}
