//! DNS module tests.

use super::*;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use std::time::Duration;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_resolver() -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(2);
    opts.attempts = 1; // Single attempt for faster failures in tests
    opts.ndots = 0;

    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}

#[tokio::test]
async fn test_lookup_host_address_ipv4_literal() {
    let resolver = create_test_resolver();
    // IP literals short-circuit without a DNS query
    let address = lookup_host_address("8.8.8.8", &resolver).await.unwrap();
    assert_eq!(address, "8.8.8.8".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn test_lookup_host_address_ipv6_literal() {
    let resolver = create_test_resolver();
    let address = lookup_host_address("2001:4860:4860::8888", &resolver)
        .await
        .unwrap();
    assert!(address.is_ipv6());
}

#[tokio::test]
async fn test_lookup_host_address_unknown_host() {
    let resolver = create_test_resolver();
    // .invalid never resolves (RFC 2606); offline this times out instead,
    // either way the failure maps to HostResolution
    let result = lookup_host_address("definitely-does-not-exist-12345.invalid", &resolver).await;
    match result {
        Err(LookupError::HostResolution(host)) => {
            assert_eq!(host, "definitely-does-not-exist-12345.invalid");
        }
        other => panic!("expected HostResolution error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_mail_exchange_unknown_domain() {
    let resolver = create_test_resolver();
    let result = lookup_mail_exchange("definitely-does-not-exist-12345.invalid", &resolver).await;
    assert!(matches!(result, Err(LookupError::HostResolution(_))));
}

#[tokio::test]
async fn test_dns_address_resolver_ip_literal_passthrough() {
    let addresses = DnsAddressResolver::new(Arc::new(create_test_resolver()));
    let address = addresses.host_address("192.0.2.7").await.unwrap();
    assert_eq!(address, "192.0.2.7".parse::<IpAddr>().unwrap());
}
