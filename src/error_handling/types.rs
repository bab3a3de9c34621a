//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for endpoint-to-organization lookups.
///
/// Every lookup failure surfaces as one of these variants; there is no
/// internal recovery or retry. Callers are expected to treat any of them as
/// "organization unknown for this endpoint" and degrade gracefully.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The mailto reference could not be parsed as a mail address.
    #[error("cannot parse mail address from '{0}'")]
    AddressFormat(String),

    /// No usable domain/host could be extracted, or DNS/address resolution
    /// found nothing. Covers unknown-host conditions uniformly for both the
    /// mailto and generic-URI paths.
    #[error("no network address found for '{0}'")]
    HostResolution(String),

    /// The request to the IP intelligence provider failed (connection,
    /// I/O, timeout, or body read).
    #[error("provider request failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The provider's response body was not a JSON object.
    #[error("provider response is not a JSON object: {0}")]
    ResponseFormat(#[source] serde_json::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages_name_the_target() {
        let err = LookupError::AddressFormat("mailto:broken".to_string());
        assert!(err.to_string().contains("mailto:broken"));

        let err = LookupError::HostResolution("example.com".to_string());
        assert!(err.to_string().contains("example.com"));
    }

    #[test]
    fn test_response_format_chains_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::ResponseFormat(parse_err);
        // The underlying parse failure stays reachable for diagnostics
        assert!(std::error::Error::source(&err).is_some());
    }
}
