//! Database schema and connection management

use crate::error::{LeagueError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for widget records
pub struct WidgetDatabase {
    pub(crate) conn: Connection,
}

impl WidgetDatabase {
    /// Open the default database file and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open (or create) a database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening widget database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, discarded on drop
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default location of the database file
    pub fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| LeagueError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("league-board").join("widgets.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // AUTOINCREMENT keeps ids from being reused after deletes, like a serial column
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS widgets (
                widget_id INTEGER PRIMARY KEY AUTOINCREMENT,
                widget_name TEXT NOT NULL CHECK (length(trim(widget_name)) > 0),
                description TEXT,
                visibility TEXT,
                status TEXT DEFAULT 'pending',
                created_at INTEGER NOT NULL DEFAULT (unixepoch()),
                redirect_link TEXT,
                image_url TEXT,
                category_ids TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TRIGGER IF NOT EXISTS widgets_created_at_write_once
             BEFORE UPDATE OF created_at ON widgets
             WHEN NEW.created_at IS NOT OLD.created_at
             BEGIN
                 SELECT RAISE(ABORT, 'created_at is write-once');
             END",
            [],
        )?;

        self.conn.execute(
            "CREATE TRIGGER IF NOT EXISTS widgets_id_immutable
             BEFORE UPDATE OF widget_id ON widgets
             WHEN NEW.widget_id IS NOT OLD.widget_id
             BEGIN
                 SELECT RAISE(ABORT, 'widget_id is immutable');
             END",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_widgets_status ON widgets(status)",
            [],
        )?;

        Ok(())
    }
}
