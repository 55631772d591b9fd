// Reports API HTTP client
//
// Wraps `reqwest::Client` with fleetly URL construction and the response
// contract shared by every reports endpoint: 2xx carries a JSON array,
// anything else carries a plain-text diagnostic body.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{Device, ReportItem, StatisticsRecord};
use crate::query::{ReportFilter, TimeRange};
use crate::transport::TransportConfig;

/// HTTP client for the telemetry server's reports API.
pub struct ReportsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ReportsClient {
    /// Create a new client from a `TransportConfig`. The `base_url` should
    /// be the server root (e.g. `https://tracker.example.com`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a full URL for an API path plus a pre-encoded query string.
    pub(crate) fn api_url(&self, path: &str, query: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = if query.is_empty() {
            format!("{base}/api/{path}")
        } else {
            format!("{base}/api/{path}?{query}")
        };
        Url::parse(&full).map_err(Error::from)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the combined route/events report for a selection.
    ///
    /// `GET /api/reports/combined?from=..&to=..&deviceId=..[&groupId=..]`
    pub async fn combined_report(&self, filter: &ReportFilter) -> Result<Vec<ReportItem>, Error> {
        let url = self.api_url("reports/combined", &filter.to_query_string())?;
        debug!(%url, "fetching combined report");
        self.get_json(url).await
    }

    /// Fetch server usage statistics for a time range.
    ///
    /// `GET /api/statistics?from=..&to=..`
    pub async fn statistics(&self, range: &TimeRange) -> Result<Vec<StatisticsRecord>, Error> {
        let url = self.api_url("statistics", &range.to_query_string())?;
        debug!(%url, "fetching statistics");
        self.get_json(url).await
    }

    /// Fetch all devices visible to the session.
    ///
    /// `GET /api/devices`
    pub async fn devices(&self) -> Result<Vec<Device>, Error> {
        let url = self.api_url("devices", "")?;
        debug!(%url, "fetching devices");
        self.get_json(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON array response.
    ///
    /// Non-2xx responses carry their diagnostic text body verbatim in
    /// `Error::Server`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}
