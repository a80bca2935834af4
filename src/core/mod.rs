//! Core library components.
//!
//! The secret loading pipeline, independent of the command line: name
//! derivation, reference parsing, listing, fetching, injection and cleanup,
//! plus the store clients and environment sinks they run against.

pub mod cleanup;
pub mod client;
pub mod config;
pub mod constants;
pub mod fetcher;
pub mod inject;
pub mod lister;
pub mod reference;
pub mod run;
pub mod sink;
pub mod transform;
