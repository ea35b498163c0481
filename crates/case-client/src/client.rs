//! HTTP client for the case search endpoint.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info, warn};

use case_model::{CaseFilter, Record, parse_response};

use crate::error::{ClientError, Result};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Path of the search resource, relative to the endpoint.
pub const CASES_PATH: &str = "cases";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the case search endpoint.
pub struct CaseClient {
    /// HTTP client.
    client: Client,
    /// Resolved `<endpoint>/cases` URL without a query.
    cases_url: Url,
}

impl CaseClient {
    /// Create a client for `endpoint`, e.g. `http://localhost:3000`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let cases_url = resolve_cases_url(endpoint)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, cases_url })
    }

    /// The search URL for `filter`, blank filter values removed.
    pub fn cases_url(&self, filter: &CaseFilter) -> Url {
        let mut url = self.cases_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in filter.query_pairs() {
                query.append_pair(name, &value);
            }
        }
        url
    }

    /// Run a search. No matches is an empty list, not an error.
    pub fn search(&self, filter: &CaseFilter) -> Result<Vec<Record>> {
        let url = self.cases_url(filter);
        let filters: Vec<&str> = filter.query_pairs().iter().map(|(name, _)| *name).collect();
        debug!(endpoint = %self.cases_url, ?filters, "querying cases");

        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                format!("case-export/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status, "case query failed");
            return Err(ClientError::Status { status, message });
        }

        let body = response.text()?;
        let cases = decode_cases(&body)?;
        info!(count = cases.len(), "fetched cases");
        Ok(cases)
    }
}

/// Decode a response body. A missing or falsy `cases` field is no matches.
pub fn decode_cases(body: &str) -> Result<Vec<Record>> {
    Ok(parse_response(body)?)
}

fn resolve_cases_url(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };
    let mut base = Url::parse(endpoint.trim()).map_err(|error| invalid(error.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL".to_string()));
    }
    // Url::join replaces the last segment unless the path ends in a slash.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.join(CASES_PATH)
        .map_err(|error| invalid(error.to_string()))
}
