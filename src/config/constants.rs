//! Configuration constants.
//!
//! This module defines the operational constants used throughout the crate:
//! the provider endpoint and the fixed network timeouts.

use std::time::Duration;

/// Read timeout for provider fetches.
///
/// Applied to every GET against the IP intelligence provider. A lookup that
/// exceeds this surfaces as a transport error; there is no retry.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Base URL of the IP intelligence provider.
///
/// The address under lookup is appended as the final path segment, e.g.
/// `https://ipinfo.io/8.8.8.8`. See <https://ipinfo.io/developers>.
pub const PROVIDER_BASE_URL: &str = "https://ipinfo.io";

/// DNS query timeout in seconds.
///
/// Kept short so lookups fail fast on slow or unresponsive DNS servers;
/// most queries complete well under a second.
pub const DNS_TIMEOUT_SECS: u64 = 3;
