//! Core data structures.

use serde::Serialize;

/// The owning organization of a network address, as reported by the IP
/// intelligence provider.
///
/// Constructed only from a successful provider fetch and never mutated
/// afterwards. Either field may be empty when the provider has no data for
/// the address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organization {
    /// Free-text organization string (e.g., "AS15169 Google LLC").
    pub name: String,
    /// Two-letter country code (e.g., "US").
    pub country: String,
}
