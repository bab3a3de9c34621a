//! Per-address memoization of organization lookups.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Mutex, PoisonError};

use crate::models::Organization;

/// In-memory cache mapping resolved network addresses to organizations.
///
/// Purely an optimization: losing it only costs redundant provider calls.
/// Entries accumulate for the lifetime of the owning resolver; there is no
/// eviction, TTL, or size bound. The lock is held only for the duration of
/// a map access, never across network I/O, so concurrent first-time lookups
/// of the same address may both fetch and both store the identical,
/// externally-determined value.
#[derive(Debug, Default)]
pub struct OrganizationCache {
    entries: Mutex<HashMap<IpAddr, Organization>>,
}

impl OrganizationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached organization for `address`, if any.
    pub fn get(&self, address: &IpAddr) -> Option<Organization> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.get(address).cloned()
    }

    /// Inserts `organization` for `address`, keeping an existing entry.
    ///
    /// First writer wins: the value is a pure function of the address, so a
    /// racing second writer would store the same data anyway.
    pub fn insert(&self, address: IpAddr, organization: Organization) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.entry(address).or_insert(organization);
    }

    /// Number of cached addresses.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn addr(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    fn org(name: &str, country: &str) -> Organization {
        Organization {
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_get_returns_inserted_value() {
        let cache = OrganizationCache::new();
        assert!(cache.get(&addr("8.8.8.8")).is_none());

        cache.insert(addr("8.8.8.8"), org("AS15169 Google LLC", "US"));
        assert_eq!(
            cache.get(&addr("8.8.8.8")),
            Some(org("AS15169 Google LLC", "US"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_writer_wins() {
        let cache = OrganizationCache::new();
        cache.insert(addr("1.1.1.1"), org("first", "AU"));
        cache.insert(addr("1.1.1.1"), org("second", "US"));

        assert_eq!(cache.get(&addr("1.1.1.1")), Some(org("first", "AU")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_addresses_are_independent() {
        let cache = OrganizationCache::new();
        cache.insert(addr("8.8.8.8"), org("google", "US"));
        cache.insert(addr("2606:4700:4700::1111"), org("cloudflare", "US"));

        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get(&addr("2606:4700:4700::1111")),
            Some(org("cloudflare", "US"))
        );
    }

    #[test]
    fn test_concurrent_access_is_serialized() {
        let cache = Arc::new(OrganizationCache::new());
        let mut handles = Vec::new();

        for i in 0..8u8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                let address = addr(&format!("10.0.0.{i}"));
                cache.insert(address, org(&format!("org-{i}"), "US"));
                cache.get(&address)
            }));
        }

        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
        assert_eq!(cache.len(), 8);
    }
}
