//! League API client: envelope types and standings retrieval.

pub mod http;
pub mod types;

pub use http::StandingsClient;
pub use types::{ApiEnvelope, LeagueStandingsData, TeamStanding};
