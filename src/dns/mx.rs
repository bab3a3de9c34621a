//! Mail exchanger resolution.
//!
//! Resolves a mail domain to the network address of its preferred mail
//! exchanger: MX records are queried, sorted by preference, and the exchange
//! hostnames resolved in order until one yields an address.

use std::net::IpAddr;

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::dns::resolution::lookup_host_address;
use crate::error_handling::LookupError;

/// Resolves `domain`'s preferred mail exchanger to a network address.
///
/// # Arguments
///
/// * `domain` - The mail domain to query (e.g., "example.com")
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The address of the first mail exchanger (lowest preference value) that
/// resolves, or [`LookupError::HostResolution`] if the domain has no MX
/// records or none of its exchangers resolve.
pub async fn lookup_mail_exchange(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<IpAddr, LookupError> {
    let lookup = match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => lookup,
        Err(e) => {
            log::warn!("MX lookup failed for {domain}: {e}");
            return Err(LookupError::HostResolution(domain.to_string()));
        }
    };

    let mut exchanges: Vec<(u16, String)> = lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some((mx.preference(), mx.exchange().to_utf8()))
            } else {
                None
            }
        })
        .collect();
    // Lower preference = higher priority
    exchanges.sort_by_key(|(preference, _)| *preference);

    for (preference, exchange) in exchanges {
        match lookup_host_address(&exchange, resolver).await {
            Ok(address) => return Ok(address),
            Err(e) => {
                log::debug!("mail exchanger {exchange} (preference {preference}) for {domain} did not resolve: {e}");
            }
        }
    }

    Err(LookupError::HostResolution(domain.to_string()))
}
