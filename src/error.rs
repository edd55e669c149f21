//! Error types for the league board

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

/// Message used when the API reports failure without saying why.
pub const DEFAULT_API_FAILURE_MESSAGE: &str = "request was not successful";

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API response reported success but carried no data")]
    MissingData,

    /// The API answered with `success: false`. Displays the server message verbatim.
    #[error("{message}")]
    Api { message: String },

    #[error("API base URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Invalid API base URL: {url}")]
    InvalidApiUrl { url: String },

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Widget name must not be empty")]
    InvalidWidgetName,

    #[error("Widget not found: {id}")]
    WidgetNotFound { id: i64 },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Data directory error: {message}")]
    DataDir { message: String },
}

/// Coarse failure classes callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable, DNS, connection refused, body read failures.
    Transport,
    /// The body was not JSON, or not the expected envelope.
    Protocol,
    /// The envelope said `success: false`.
    Application,
    Configuration,
    Storage,
    NotFound,
    Validation,
}

impl LeagueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeagueError::Http(_) => ErrorKind::Transport,
            LeagueError::Json(_) | LeagueError::MissingData => ErrorKind::Protocol,
            LeagueError::Api { .. } => ErrorKind::Application,
            LeagueError::MissingApiUrl { .. }
            | LeagueError::InvalidApiUrl { .. }
            | LeagueError::DataDir { .. } => ErrorKind::Configuration,
            LeagueError::Storage(_) | LeagueError::Io(_) => ErrorKind::Storage,
            LeagueError::WidgetNotFound { .. } => ErrorKind::NotFound,
            LeagueError::InvalidWidgetName | LeagueError::InvalidId(_) => ErrorKind::Validation,
        }
    }

    /// Build an application failure from an optional server message.
    pub fn api(message: Option<String>) -> Self {
        LeagueError::Api {
            message: message.unwrap_or_else(|| DEFAULT_API_FAILURE_MESSAGE.to_string()),
        }
    }
}
