//! Fetch orchestration over a shared `reqwest` client.
//!
//! # Design
//! `Fetcher` is the host for `catalog-core`: it executes the `HttpRequest`
//! the core built, hands the `HttpResponse` back to the core for
//! classification and decoding, and delivers one `FetchResult`. Every failure
//! class, including a request that could not be built and transport errors,
//! travels through that same result; nothing is logged and dropped.
//!
//! The client is cloned into each spawned task; `reqwest::Client` is an
//! `Arc` around its connection pool, so fetches share it without locking.
//! There is no retry and no deadline: one call is one round trip.

use catalog_core::{ApiError, CatalogClient, CatalogResponse, HttpMethod, HttpRequest, HttpResponse};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("card-catalog/", env!("CARGO_PKG_VERSION"));

/// Every way a fetch can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The search URL could not be built, so there was nothing to send.
    #[error("no request to send")]
    MissingRequest,

    /// Connection, TLS or I/O failure before a response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The catalog answered with an error status, or a body that did not
    /// decode.
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type FetchResult = Result<CatalogResponse, FetchError>;

#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    catalog: CatalogClient,
}

impl Fetcher {
    pub fn new(catalog: CatalogClient) -> Result<Self, reqwest::Error> {
        // Redirects come back as data so the core classifies them.
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(catalog, http))
    }

    pub fn with_client(catalog: CatalogClient, http: reqwest::Client) -> Self {
        Self { http, catalog }
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Dispatch `request` on its own task and invoke `on_complete` once with
    /// the outcome.
    ///
    /// Returns immediately. Concurrent fetches complete in no particular
    /// order and their callbacks may run on any worker thread. Dropping the
    /// handle detaches the task without cancelling it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch<F>(&self, request: Option<HttpRequest>, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(FetchResult) + Send + 'static,
    {
        let fetcher = self.clone();
        tokio::spawn(async move {
            let result = fetcher.execute(request).await;
            on_complete(result);
        })
    }

    /// Run one lookup to completion on the current task.
    pub async fn execute(&self, request: Option<HttpRequest>) -> FetchResult {
        let Some(request) = request else {
            warn!("no request to send; search URL could not be built");
            return Err(FetchError::MissingRequest);
        };

        let url = request.url.to_string();
        let result = self.round_trip(request).await;
        match &result {
            Ok(resp) => info!(%url, cards = resp.cards().len(), "fetch complete"),
            Err(e) => warn!(%url, error = %e, "fetch failed"),
        }
        result
    }

    async fn round_trip(&self, request: HttpRequest) -> FetchResult {
        debug!(method = request.method.as_str(), url = %request.url, "dispatching");
        let response = self.send(request).await?;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(self.catalog.parse_search_cards(response)?)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let builder = match request.method {
            HttpMethod::Get => self.http.get(request.url),
        };
        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Transport(error_chain(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::MalformedResponse(error_chain(&e)))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// `err` followed by each of its sources, colon-separated.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
