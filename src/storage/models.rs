//! Data models for the storage layer

use crate::cli::types::{CategoryId, WidgetId};
use serde::{Deserialize, Serialize};

/// Status a widget receives when none is given at creation.
pub const DEFAULT_WIDGET_STATUS: &str = "pending";

/// A promotional/content card as stored in the `widgets` table.
///
/// Serialized in camelCase to match the frontend's type definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    pub description: Option<String>,
    #[serde(alias = "visbility")]
    pub visibility: Option<String>,
    /// Defaults to `pending` on insert; may be cleared to `None` afterwards.
    pub status: Option<String>,
    /// Unix seconds, set by the database on insert.
    pub created_at: i64,
    pub redirect_link: Option<String>,
    pub image_url: Option<String>,
    pub category_ids: Option<Vec<CategoryId>>,
}

/// Fields accepted when creating a widget. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWidget {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "visbility")]
    pub visibility: Option<String>,
    /// `None` leaves the column default (`pending`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub redirect_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_ids: Option<Vec<CategoryId>>,
}

impl NewWidget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_redirect_link(mut self, link: impl Into<String>) -> Self {
        self.redirect_link = Some(link.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_category_ids(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.category_ids = Some(ids.into_iter().collect());
        self
    }
}
