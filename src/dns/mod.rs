//! DNS resolution for endpoint lookups.
//!
//! This module provides the address-resolution capabilities the organization
//! resolver consumes:
//! - Mail exchanger resolution (MX records, lowest preference first)
//! - Host address resolution (A/AAAA records, IP literals short-circuit)
//!
//! Both are exposed behind the [`AddressResolver`] trait so callers can
//! inject a stub in tests; [`DnsAddressResolver`] is the `hickory-resolver`
//! backed implementation used in production.

mod mx;
mod resolution;

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

// Re-export public API
pub use mx::lookup_mail_exchange;
pub use resolution::lookup_host_address;

/// Address-resolution capability consumed by the organization resolver.
///
/// Implementations resolve a mail domain (via its mail-exchange record) or a
/// URI host to a network address. Every failure mode — unknown host, empty
/// answer, DNS timeout — surfaces uniformly as
/// [`LookupError::HostResolution`].
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolves `domain`'s preferred mail exchanger to a network address.
    async fn mail_exchange(&self, domain: &str) -> Result<IpAddr, LookupError>;

    /// Resolves `host` to a network address.
    async fn host_address(&self, host: &str) -> Result<IpAddr, LookupError>;
}

/// [`AddressResolver`] backed by a shared `hickory-resolver` instance.
pub struct DnsAddressResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsAddressResolver {
    /// Wraps a DNS resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl AddressResolver for DnsAddressResolver {
    async fn mail_exchange(&self, domain: &str) -> Result<IpAddr, LookupError> {
        lookup_mail_exchange(domain, &self.resolver).await
    }

    async fn host_address(&self, host: &str) -> Result<IpAddr, LookupError> {
        lookup_host_address(host, &self.resolver).await
    }
}

#[cfg(test)]
mod tests;
