//! Storage layer for widget records
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::WidgetDatabase;
