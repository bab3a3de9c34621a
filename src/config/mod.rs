//! Configuration.
//!
//! Constants (provider endpoint, timeouts) and CLI option types.

pub mod constants;
mod types;

// Re-export public API
pub use constants::{DNS_TIMEOUT_SECS, FETCH_TIMEOUT, PROVIDER_BASE_URL};
pub use types::{Config, LogFormat, LogLevel};
