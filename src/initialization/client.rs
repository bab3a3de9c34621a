//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for provider fetches.
///
/// Creates a `reqwest::Client` with the crate's User-Agent. The provider
/// read timeout is applied per request, so callers supplying their own
/// client still get the fixed timeout.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(concat!("endpoint_org/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}
