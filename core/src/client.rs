//! Stateless request builder and response parser for the card catalog.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. A lookup is split into `build_search_cards`, which produces
//! an `HttpRequest`, and `parse_search_cards`, which consumes an
//! `HttpResponse`. The host executes the round-trip in between.

use url::Url;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CatalogResponse, QueryParameter};

/// Public origin of the catalog API.
pub const DEFAULT_BASE_URL: &str = "https://api.magicthegathering.io";

/// Resource path of the card search endpoint.
pub const CARDS_PATH: &str = "/v1/cards";

/// Synchronous, stateless client for the card catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute search URL for `params`, or `None` if the base URL cannot
    /// carry a path and query.
    pub fn build_url(&self, params: &[QueryParameter]) -> Option<Url> {
        let mut url = Url::parse(&format!("{}{CARDS_PATH}", self.base_url)).ok()?;
        if url.cannot_be_a_base() {
            return None;
        }
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|p| (p.key.as_str(), p.value.as_str())));
        }
        Some(url)
    }

    /// GET request for `params`. Absence of a URL propagates as `None`.
    pub fn build_search_cards(&self, params: &[QueryParameter]) -> Option<HttpRequest> {
        self.build_url(params).map(HttpRequest::get)
    }

    pub fn parse_search_cards(&self, response: HttpResponse) -> Result<CatalogResponse, ApiError> {
        classify_status(response.status)?;
        decode_catalog(response.status, &response.body)
    }
}

/// Map a status code to "proceed" (`Ok`) or the matching `ApiError`.
///
/// Only 200 proceeds; every other code, including other 2xx, is an error.
pub fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200 => Ok(()),
        400 => Err(ApiError::BadRequest),
        403 => Err(ApiError::Forbidden),
        404 => Err(ApiError::NotFound),
        500 => Err(ApiError::InternalServerError),
        503 => Err(ApiError::ServiceUnavailable),
        code => Err(ApiError::Unexpected { code }),
    }
}

/// Decode a search body. A body that does not fit `CatalogResponse` becomes
/// `Unexpected` carrying the status it arrived with.
pub fn decode_catalog(status: u16, body: &[u8]) -> Result<CatalogResponse, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(status, error = %e, "catalog response body did not decode");
        ApiError::Unexpected { code: status }
    })
}
