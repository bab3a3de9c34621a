//! Host address resolution.

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Resolves a hostname to a network address using DNS.
///
/// IP literals are returned directly without a query. Otherwise the first
/// A/AAAA answer is used.
///
/// # Arguments
///
/// * `host` - The hostname or IP literal to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Errors
///
/// Returns [`LookupError::HostResolution`] if resolution fails or yields no
/// addresses.
pub async fn lookup_host_address(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<IpAddr, LookupError> {
    if let Ok(address) = host.parse::<IpAddr>() {
        return Ok(address);
    }

    let response = match resolver.lookup_ip(host).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("failed to resolve address for {host}: {e}");
            return Err(LookupError::HostResolution(host.to_string()));
        }
    };

    response
        .iter()
        .next()
        .ok_or_else(|| LookupError::HostResolution(host.to_string()))
}
