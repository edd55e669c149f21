//! HTTP client for the league API.

use reqwest::Client;
use tracing::{debug, error};

use super::types::{ApiEnvelope, LeagueStandingsData};
use crate::{
    core::{http::json_header_map, ApiConfig},
    error::Result,
};

/// Fetches standings from `<base_url>/api/league/standings`.
///
/// Holds no state between calls beyond the connection pool, so clones may be
/// used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct StandingsClient {
    client: Client,
    config: ApiConfig,
}

impl StandingsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing `reqwest` client (and its pool).
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// One GET round-trip, no retry. Returns the envelope's `data` untouched.
    ///
    /// HTTP status alone is not a failure: a `500` carrying
    /// `{"success":false,"message":...}` surfaces the server message.
    pub async fn fetch_league_standings(&self) -> Result<LeagueStandingsData> {
        let url = self.config.standings_url();
        debug!(%url, "fetching league standings");

        self.request_standings(&url).await.inspect_err(|err| {
            error!(%url, kind = ?err.kind(), error = %err, "error fetching league standings");
        })
    }

    async fn request_standings(&self, url: &str) -> Result<LeagueStandingsData> {
        let body = self
            .client
            .get(url)
            .headers(json_header_map())
            .send()
            .await?
            .bytes()
            .await?;

        let envelope: ApiEnvelope<LeagueStandingsData> = serde_json::from_slice(&body)?;
        envelope.into_result()
    }
}

/// Build a client from `NEXT_PUBLIC_API_URL` and fetch once.
pub async fn fetch_league_standings() -> Result<LeagueStandingsData> {
    let config = ApiConfig::from_env().inspect_err(|err| {
        error!(error = %err, "league API is not configured");
    })?;
    StandingsClient::new(config).fetch_league_standings().await
}

impl From<ApiConfig> for StandingsClient {
    fn from(config: ApiConfig) -> Self {
        Self::new(config)
    }
}
