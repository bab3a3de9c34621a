//! endpoint_org library: endpoint-to-organization resolution
//!
//! This library resolves a network endpoint — an email recipient (via its
//! domain's mail-exchange record) or a URI host — to the owning organization
//! and country, as reported by an IP intelligence provider, memoizing
//! results per resolved address so repeated lookups stay local.
//!
//! # Example
//!
//! ```no_run
//! use endpoint_org::initialization::{init_client, init_resolver};
//! use endpoint_org::{DnsAddressResolver, OrganizationResolver};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client()?;
//! let addresses = Arc::new(DnsAddressResolver::new(init_resolver()));
//! let resolver = OrganizationResolver::new(client, addresses);
//!
//! let (label, organization) = resolver
//!     .resolve_endpoint("mailto:user@example.com")
//!     .await?;
//! println!("{label}: {} ({})", organization.name, organization.country);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod cache;
pub mod config;
mod dns;
mod endpoint;
mod error_handling;
pub mod initialization;
mod models;
mod provider;
mod resolver;

// Re-export public API
pub use cache::OrganizationCache;
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{AddressResolver, DnsAddressResolver};
pub use error_handling::{InitializationError, LookupError};
pub use models::Organization;
pub use resolver::OrganizationResolver;
