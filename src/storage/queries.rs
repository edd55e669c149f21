//! Basic database query operations

use super::{models::*, schema::WidgetDatabase};
use crate::{
    cli::types::{CategoryId, WidgetId},
    error::{LeagueError, Result},
};
use rusqlite::{params, types::Type, OptionalExtension, Row, ToSql};
use tracing::debug;

const WIDGET_COLUMNS: &str = "widget_id, widget_name, description, visibility, status,
     created_at, redirect_link, image_url, category_ids";

impl WidgetDatabase {
    /// Insert a widget and return it as stored, defaults included
    pub fn insert_widget(&mut self, widget: &NewWidget) -> Result<Widget> {
        if widget.name.trim().is_empty() {
            return Err(LeagueError::InvalidWidgetName);
        }

        let category_ids = widget
            .category_ids
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let mut columns = vec![
            "widget_name",
            "description",
            "visibility",
            "redirect_link",
            "image_url",
            "category_ids",
        ];
        let mut values: Vec<&dyn ToSql> = vec![
            &widget.name,
            &widget.description,
            &widget.visibility,
            &widget.redirect_link,
            &widget.image_url,
            &category_ids,
        ];
        // Leave status out entirely so the column default applies
        if let Some(status) = &widget.status {
            columns.push("status");
            values.push(status);
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO widgets ({}) VALUES ({})",
            columns.join(", "),
            placeholders
        );
        self.conn.execute(&sql, values.as_slice())?;

        let id = WidgetId::new(self.conn.last_insert_rowid());
        debug!(%id, name = %widget.name, "inserted widget");

        self.get_widget(id)?
            .ok_or(LeagueError::WidgetNotFound { id: id.as_i64() })
    }

    /// Get a single widget by id
    pub fn get_widget(&self, id: WidgetId) -> Result<Option<Widget>> {
        let sql = format!("SELECT {WIDGET_COLUMNS} FROM widgets WHERE widget_id = ?");
        let widget = self
            .conn
            .query_row(&sql, params![id.as_i64()], |row| self.row_to_widget(row))
            .optional()?;
        Ok(widget)
    }

    /// All widgets, oldest id first
    pub fn list_widgets(&self) -> Result<Vec<Widget>> {
        let sql = format!("SELECT {WIDGET_COLUMNS} FROM widgets ORDER BY widget_id");
        let mut stmt = self.conn.prepare(&sql)?;
        let widgets = stmt
            .query_map([], |row| self.row_to_widget(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(widgets)
    }

    /// Set or clear a widget's status. Returns false when no such widget exists.
    ///
    /// Status is free text; no transition rules are applied.
    pub fn update_widget_status(&mut self, id: WidgetId, status: Option<&str>) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE widgets SET status = ? WHERE widget_id = ?",
            params![status, id.as_i64()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Delete a widget. Returns false when no such widget exists.
    pub fn delete_widget(&mut self, id: WidgetId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM widgets WHERE widget_id = ?", params![id.as_i64()])?;
        Ok(rows_affected > 0)
    }

    fn row_to_widget(&self, row: &Row) -> rusqlite::Result<Widget> {
        let category_ids: Option<String> = row.get(8)?;
        let category_ids = category_ids
            .map(|raw| serde_json::from_str::<Vec<CategoryId>>(&raw))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

        Ok(Widget {
            id: WidgetId::new(row.get(0)?),
            name: row.get(1)?,
            description: row.get(2)?,
            visibility: row.get(3)?,
            status: row.get(4)?,
            created_at: row.get(5)?,
            redirect_link: row.get(6)?,
            image_url: row.get(7)?,
            category_ids,
        })
    }
}
