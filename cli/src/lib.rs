//! Host side of the card catalog client.
//!
//! # Overview
//! `catalog-core` builds requests and parses responses; this crate owns the
//! network. `Fetcher` executes lookups concurrently on tokio over one shared
//! `reqwest::Client` and delivers each outcome to a callback.
//!
//! # Design
//! - All failure classes surface through `FetchResult`, one per lookup.
//! - Configuration is `clap` (flags and `CATALOG_*` env vars), logging is
//!   `tracing` to stderr.
//! - `report::render_outcome` produces the whole stdout block for a lookup.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod report;

pub use config::{Args, LogFormat};
pub use fetch::{FetchError, FetchResult, Fetcher};
pub use report::render_outcome;
