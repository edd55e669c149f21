//! Type-safe wrappers for widget and category identities.

pub mod ids;

pub use ids::{CategoryId, WidgetId};
