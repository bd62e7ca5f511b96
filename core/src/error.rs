//! Error kinds for the card catalog client.
//!
//! # Design
//! The set is closed: five statuses the catalog documents get a dedicated
//! variant, and every other outcome that is not a plain 200 lands in
//! `Unexpected` carrying the status that accompanied it. A body that fails
//! to decode is reported as `Unexpected` with the (successful) status code.

use thiserror::Error;

/// Errors returned by `CatalogClient::parse_search_cards`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400: the query was rejected by the catalog.
    #[error("bad request (400)")]
    BadRequest,

    /// 403: the catalog refused the request, usually a rate limit.
    #[error("forbidden (403)")]
    Forbidden,

    /// 404: the resource path does not exist.
    #[error("not found (404)")]
    NotFound,

    /// 500
    #[error("internal server error (500)")]
    InternalServerError,

    /// 503: the catalog is down for maintenance or overloaded.
    #[error("service unavailable (503)")]
    ServiceUnavailable,

    /// Any other status, or a 200 whose body did not decode.
    #[error("unexpected response (status {code})")]
    Unexpected { code: u16 },
}

impl ApiError {
    /// The HTTP status this error stands for.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest => 400,
            ApiError::Forbidden => 403,
            ApiError::NotFound => 404,
            ApiError::InternalServerError => 500,
            ApiError::ServiceUnavailable => 503,
            ApiError::Unexpected { code } => *code,
        }
    }
}
