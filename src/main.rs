//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `endpoint_org` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

use endpoint_org::initialization::{init_client, init_logger_with, init_resolver};
use endpoint_org::{Config, DnsAddressResolver, OrganizationResolver};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client().context("Failed to initialize HTTP client")?;
    let addresses = Arc::new(DnsAddressResolver::new(init_resolver()));
    let resolver = Arc::new(OrganizationResolver::with_provider(
        client,
        addresses,
        config.provider.clone(),
    ));

    // Resolve all targets concurrently over the shared resolver so repeated
    // addresses hit the cache instead of the provider
    let mut tasks = FuturesUnordered::new();
    for (index, target) in config.targets.iter().cloned().enumerate() {
        let resolver = Arc::clone(&resolver);
        tasks.push(tokio::spawn(async move {
            let outcome = resolver.resolve_endpoint(&target).await;
            (index, target, outcome)
        }));
    }

    let mut results = Vec::with_capacity(config.targets.len());
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => log::warn!("Lookup task panicked: {e:?}"),
        }
    }
    // Report in input order regardless of completion order
    results.sort_by_key(|(index, _, _)| *index);

    let mut failed = 0usize;
    for (_, target, outcome) in &results {
        match outcome {
            Ok((label, organization)) => {
                if config.json {
                    println!(
                        "{}",
                        serde_json::json!({ "label": label, "organization": organization })
                    );
                } else {
                    println!("{label}\t{}\t{}", organization.name, organization.country);
                }
            }
            Err(e) => {
                failed += 1;
                log::warn!("Failed to resolve {target}: {e}");
                eprintln!("{target}: organization unknown ({e})");
            }
        }
    }

    if failed > 0 && failed == results.len() {
        process::exit(1);
    }

    Ok(())
}
