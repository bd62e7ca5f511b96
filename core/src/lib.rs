//! Request/response core for the card catalog API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the actual
//! HTTP round-trip, which keeps the core deterministic and testable.
//!
//! # Design
//! - `CatalogClient` is stateless; it holds only `base_url`.
//! - A lookup is split into `build_search_cards` (URL + GET descriptor) and
//!   `parse_search_cards` (status classification, then decode).
//! - Every card field is an `Option`; absence is never an error.
//! - `render_card` is the text presentation used by the CLI.

pub mod client;
pub mod error;
pub mod http;
pub mod present;
pub mod types;

pub use client::{classify_status, decode_catalog, CatalogClient, CARDS_PATH, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use present::{render_card, UNKNOWN};
pub use types::{CardRecord, CatalogResponse, QueryParameter, NAME_PARAM};
