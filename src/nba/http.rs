//! HTTP client for the local NBA stats API

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    error::TrackerError,
    nba::{
        types::{ApiErrorBody, DefenseRanks, PlayerPayload, RosterEntry, Schedule},
        DataSource,
    },
    Result,
};


/// Where the stats backend listens by default.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Default headers for every request.
pub fn get_common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Client for `{base}/api/...`.
#[derive(Debug, Clone)]
pub struct NbaClient {
    http: Client,
    base_url: String,
}

impl NbaClient {
    /// Build a client for the given base URL (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent("nba-tracker/0.1")
            .default_headers(get_common_headers())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON endpoint, turning non-success statuses into
    /// [`TrackerError::Api`] with the server's `error` message when present.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json::<T>().await?)
    }
}

impl DataSource for NbaClient {
    async fn get_schedule(&self) -> Result<Schedule> {
        self.get_json("/api/schedule").await
    }

    async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
        self.get_json("/api/roster").await
    }

    async fn get_defense_ranks(&self) -> Result<DefenseRanks> {
        self.get_json("/api/defense_ranks").await
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerPayload> {
        self.get_json(&format!("/api/player/{}", id)).await
    }
}
