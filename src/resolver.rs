//! Endpoint-to-organization resolution.

use std::net::IpAddr;
use std::sync::Arc;

use crate::cache::OrganizationCache;
use crate::config::PROVIDER_BASE_URL;
use crate::dns::AddressResolver;
use crate::endpoint::{extract_target, EndpointTarget};
use crate::error_handling::LookupError;
use crate::models::Organization;
use crate::provider;

/// Resolves endpoints (mail recipients or URI hosts) to the owning
/// organization and country, memoizing results per resolved address.
///
/// One instance is meant to be shared (e.g., wrapped in an `Arc`) by all
/// tasks performing lookups, so they see a single cache. The cache lock is
/// never held across network I/O: concurrent first-time lookups of the same
/// address may both reach the provider, both storing the identical result.
pub struct OrganizationResolver {
    client: Arc<reqwest::Client>,
    addresses: Arc<dyn AddressResolver>,
    cache: OrganizationCache,
    provider_base: String,
}

impl OrganizationResolver {
    /// Creates a resolver against the default provider endpoint.
    pub fn new(client: Arc<reqwest::Client>, addresses: Arc<dyn AddressResolver>) -> Self {
        Self::with_provider(client, addresses, PROVIDER_BASE_URL)
    }

    /// Creates a resolver against a custom provider base URL.
    ///
    /// Useful for self-hosted provider deployments and for pointing tests at
    /// a local mock server.
    pub fn with_provider(
        client: Arc<reqwest::Client>,
        addresses: Arc<dyn AddressResolver>,
        provider_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            addresses,
            cache: OrganizationCache::new(),
            provider_base: provider_base.into(),
        }
    }

    /// Resolves a target reference to `(label, organization)`.
    ///
    /// `mailto:` references resolve the recipient domain's mail exchanger;
    /// anything else resolves the URI host. The label is the domain (mailto)
    /// or host (generic) string, independent of cache state.
    ///
    /// # Errors
    ///
    /// * [`LookupError::AddressFormat`] - unparseable mailto reference
    /// * [`LookupError::HostResolution`] - no usable domain/host, or
    ///   resolution found no address
    /// * [`LookupError::Transport`] - provider request failed
    /// * [`LookupError::ResponseFormat`] - provider response was not JSON
    pub async fn resolve_endpoint(
        &self,
        reference: &str,
    ) -> Result<(String, Organization), LookupError> {
        match extract_target(reference)? {
            EndpointTarget::MailDomain(domain) => {
                let address = self.addresses.mail_exchange(&domain).await?;
                let organization = self.resolve_organization(address).await?;
                Ok((domain, organization))
            }
            EndpointTarget::Host(host) => {
                let address = self.addresses.host_address(&host).await?;
                let organization = self.resolve_organization(address).await?;
                Ok((host, organization))
            }
        }
    }

    /// Resolves an address to its organization, consulting the cache first.
    ///
    /// A failed fetch leaves the cache untouched, so a later lookup of the
    /// same address can still succeed and populate it.
    async fn resolve_organization(&self, address: IpAddr) -> Result<Organization, LookupError> {
        if let Some(cached) = self.cache.get(&address) {
            log::debug!("organization cache hit for {address}");
            return Ok(cached);
        }

        let organization =
            provider::fetch_organization(&self.client, &self.provider_base, address).await?;

        self.cache.insert(address, organization.clone());
        Ok(organization)
    }

    /// Number of addresses memoized so far.
    pub fn cached_addresses(&self) -> usize {
        self.cache.len()
    }
}
