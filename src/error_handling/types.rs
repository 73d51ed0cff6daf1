//! Error type definitions.
//!
//! This module defines all error types used throughout the crate. Per-request
//! transport failures are deliberately *not* represented here as caller-facing
//! errors: they are contained inside the dispatcher and only counted by
//! [`super::DispatchStats`].

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error constructing a request spec from a structured record.
#[derive(Error, Debug)]
pub enum SpecError {
    /// A required field is missing, the URL is empty, or the method is
    /// outside GET/POST.
    #[error("malformed request spec: {0}")]
    MalformedSpec(String),
}

/// Error returned by the batch dispatch call itself.
///
/// A batch can only fail on programmer error; individual request failures
/// never surface here.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Options failed validation (e.g. zero concurrency cap).
    #[error("invalid dispatch options: {0}")]
    InvalidOptions(String),

    /// The shared HTTP client could not be built (e.g. malformed proxy
    /// address).
    #[error("HTTP client initialization error: {0}")]
    ClientBuild(#[from] ReqwestError),
}

/// Error parsing a response body on demand.
#[derive(Error, Debug)]
pub enum BodyError {
    /// The body text is not valid JSON.
    #[error("body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Categories of contained per-request failures.
///
/// These never propagate to the batch caller; they are counted in
/// [`super::DispatchStats`] and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The spec's timeout expired before the exchange completed.
    Timeout,
    /// TCP or TLS connection failure.
    Connect,
    /// Request could not be sent (protocol-level failure).
    Request,
    /// Failure while streaming the response body.
    Body,
    /// Failure decoding the response payload.
    Decode,
    /// Redirect handling failure reported by the transport.
    Redirect,
    /// The request could not be constructed (bad URL, bad header value).
    Builder,
    /// Anything the transport reports that fits no other bucket.
    Other,
}
