//! Initialization of shared resources.
//!
//! This module provides functions to initialize the collaborators a
//! resolver needs:
//! - HTTP client (provider fetches)
//! - DNS resolver (mail-exchange and host lookups)
//! - Logger
//!
//! All initialization functions return proper error types for error
//! handling.

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
