//! Core utilities for the league board
//!
//! - `config`: API base URL configuration
//! - `http`: shared request headers

pub mod config;
pub mod http;

pub use config::{ApiConfig, API_URL_ENV_VAR};
pub use http::json_header_map;
