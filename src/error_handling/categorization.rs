//! Error categorization.
//!
//! Maps transport errors onto the [`ErrorType`] taxonomy so contained
//! failures stay observable through the batch statistics.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an [`ErrorType`].
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::Timeout
    } else if error.is_connect() {
        ErrorType::Connect
    } else if error.is_builder() {
        ErrorType::Builder
    } else if error.is_redirect() {
        ErrorType::Redirect
    } else if error.is_body() {
        ErrorType::Body
    } else if error.is_decode() {
        ErrorType::Decode
    } else if error.is_request() {
        ErrorType::Request
    } else {
        ErrorType::Other
    }
}
