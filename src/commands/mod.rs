//! Command implementations for the league board CLI

pub mod password_rules;
pub mod standings;
pub mod widgets;

use std::path::PathBuf;

use crate::{core::ApiConfig, storage::WidgetDatabase, Result};

/// Resolve the API configuration from a CLI flag or `NEXT_PUBLIC_API_URL`
pub fn resolve_api_config(base_url: Option<String>) -> Result<ApiConfig> {
    ApiConfig::resolve(base_url)
}

/// Open the database at `path`, or the default location
pub fn open_database(path: Option<PathBuf>) -> Result<WidgetDatabase> {
    match path {
        Some(path) => WidgetDatabase::open(path),
        None => WidgetDatabase::new(),
    }
}
