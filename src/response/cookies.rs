//! Tolerant `Set-Cookie` parsing.
//!
//! Only the leading `name=value` pair of each entry is kept; attributes
//! (`Path`, `Expires`, ...) are not modeled. One unparsable entry never
//! fails the whole lookup.

use std::collections::HashMap;

/// Parses every `Set-Cookie` header instance (case-insensitive name lookup)
/// into a cookie-name-to-value map. Last occurrence wins on name collision.
pub(crate) fn parse_set_cookie_headers(headers: &[(String, String)]) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for (name, value) in headers {
        if !name.eq_ignore_ascii_case("set-cookie") {
            continue;
        }
        match parse_single_cookie(value) {
            Some((cookie_name, cookie_value)) => {
                result.insert(cookie_name, cookie_value);
            }
            None => {
                log::debug!("skipping unparsable set-cookie entry: {value}");
            }
        }
    }
    result
}

/// Extracts the `name=value` pair from one `Set-Cookie` value.
///
/// Returns `None` for entries with no `=` or an empty name. Surrounding
/// quotes on the value are stripped.
fn parse_single_cookie(raw: &str) -> Option<(String, String)> {
    let pair = raw.split(';').next()?;
    let mut parts = pair.splitn(2, '=');
    let name = parts.next()?.trim();
    let value = parts.next()?.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim_matches('"').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_cookie_basic() {
        assert_eq!(
            parse_single_cookie("session=abc123; Path=/; HttpOnly"),
            Some(("session".to_string(), "abc123".to_string()))
        );
    }

    #[test]
    fn test_parse_single_cookie_quoted_value() {
        assert_eq!(
            parse_single_cookie(r#"token="v 1""#),
            Some(("token".to_string(), "v 1".to_string()))
        );
    }

    #[test]
    fn test_parse_single_cookie_empty_value() {
        assert_eq!(
            parse_single_cookie("flag="),
            Some(("flag".to_string(), String::new()))
        );
    }

    #[test]
    fn test_parse_single_cookie_malformed() {
        assert_eq!(parse_single_cookie(""), None);
        assert_eq!(parse_single_cookie(";"), None);
        assert_eq!(parse_single_cookie("no-equals-sign"), None);
        assert_eq!(parse_single_cookie("=value-without-name"), None);
    }

    #[test]
    fn test_parse_headers_ignores_other_headers() {
        let headers = vec![
            ("Content-Type".to_string(), "text/html".to_string()),
            ("Set-Cookie".to_string(), "a=1".to_string()),
        ];
        let cookies = parse_set_cookie_headers(&headers);
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
    }
}
