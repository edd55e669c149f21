//! League Board Library
//!
//! Client and storage pieces behind a small sports-league site: league
//! standings fetched from the backend API, and the promotional "widget"
//! cards shown alongside them.
//!
//! ## Features
//!
//! - **Standings Retrieval**: One-shot fetch of `/api/league/standings`, unwrapping the
//!   `{ success, message, data }` envelope into a typed result
//! - **Tagged Failures**: Transport, protocol, and application errors are distinct
//!   ([`ErrorKind`])
//! - **Widget Storage**: SQLite-backed widget records with `pending` status default
//!   and write-once creation time
//! - **Password Rules**: The password policy text shown on account forms
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use league_board::{core::ApiConfig, league::StandingsClient};
//!
//! # async fn example() -> league_board::Result<()> {
//! let config = ApiConfig::new("https://api.example.com")?;
//! let standings = StandingsClient::new(config).fetch_league_standings().await?;
//! println!("{}", standings.as_value());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the backend base URL to avoid passing `--base-url` to every command:
//! ```bash
//! export NEXT_PUBLIC_API_URL=https://api.example.com
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod password;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{CategoryId, WidgetId};
pub use crate::core::{ApiConfig, API_URL_ENV_VAR};
pub use error::{ErrorKind, LeagueError, Result};
pub use league::{LeagueStandingsData, StandingsClient};
pub use storage::{NewWidget, Widget, WidgetDatabase};
