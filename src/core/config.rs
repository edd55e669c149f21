//! API configuration
//!
//! The base URL is resolved once, validated, and handed to
//! [`StandingsClient`](crate::league::StandingsClient) explicitly. A missing value is an
//! error here rather than a malformed request URL later.

use crate::error::{LeagueError, Result};
use reqwest::Url;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV_VAR: &str = "NEXT_PUBLIC_API_URL";

/// Path of the standings endpoint, relative to the base URL.
pub const STANDINGS_PATH: &str = "/api/league/standings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL such as `https://api.example.com/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(LeagueError::MissingApiUrl {
                env_var: API_URL_ENV_VAR.to_string(),
            });
        }

        let parsed = Url::parse(trimmed).map_err(|_| LeagueError::InvalidApiUrl {
            url: raw.clone(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(LeagueError::InvalidApiUrl { url: raw });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL from `NEXT_PUBLIC_API_URL`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Err(LeagueError::MissingApiUrl {
                env_var: API_URL_ENV_VAR.to_string(),
            }),
        }
    }

    /// Use the explicit value when given, otherwise fall back to the environment.
    pub fn resolve(base_url: Option<String>) -> Result<Self> {
        match base_url {
            Some(url) => Self::new(url),
            None => Self::from_env(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn standings_url(&self) -> String {
        format!("{}{}", self.base_url, STANDINGS_PATH)
    }
}
