//! Unit tests for storage functionality

use super::*;
use crate::{
    cli::types::{CategoryId, WidgetId},
    error::{ErrorKind, LeagueError},
};

fn create_test_db() -> WidgetDatabase {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut db = WidgetDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn create_test_db_with_widget() -> (WidgetDatabase, Widget) {
    let mut db = create_test_db();
    let widget = db
        .insert_widget(
            &NewWidget::new("Playoff Tickets")
                .with_description("Buy seats for the semifinal")
                .with_visibility("public")
                .with_redirect_link("https://tickets.example.com")
                .with_image_url("https://cdn.example.com/playoffs.png")
                .with_category_ids([CategoryId::new(4), CategoryId::new(2)]),
        )
        .unwrap();
    (db, widget)
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let mut db = create_test_db();
    db.initialize_schema().unwrap();
    db.initialize_schema().unwrap();
}

#[test]
fn test_insert_with_name_only_applies_defaults() {
    let mut db = create_test_db();

    let widget = db.insert_widget(&NewWidget::new("Standings Card")).unwrap();

    assert_eq!(widget.name, "Standings Card");
    assert_eq!(widget.status.as_deref(), Some(DEFAULT_WIDGET_STATUS));
    assert!(widget.created_at > 0);
    assert!(widget.description.is_none());
    assert!(widget.visibility.is_none());
    assert!(widget.redirect_link.is_none());
    assert!(widget.image_url.is_none());
    assert!(widget.category_ids.is_none());
}

#[test]
fn test_insert_keeps_explicit_status() {
    let mut db = create_test_db();

    let widget = db
        .insert_widget(&NewWidget::new("Draft Recap").with_status("published"))
        .unwrap();

    assert_eq!(widget.status.as_deref(), Some("published"));
}

#[test]
fn test_insert_round_trips_all_fields() {
    let (db, inserted) = create_test_db_with_widget();

    let fetched = db.get_widget(inserted.id).unwrap().unwrap();

    assert_eq!(fetched, inserted);
    assert_eq!(fetched.description.as_deref(), Some("Buy seats for the semifinal"));
    assert_eq!(fetched.visibility.as_deref(), Some("public"));
    assert_eq!(
        fetched.category_ids,
        Some(vec![CategoryId::new(4), CategoryId::new(2)])
    );
}

#[test]
fn test_category_ids_keep_order_and_duplicates() {
    let mut db = create_test_db();
    let ids = [9, 1, 5, 1].map(CategoryId::new);

    let widget = db
        .insert_widget(&NewWidget::new("Ordered").with_category_ids(ids))
        .unwrap();

    assert_eq!(widget.category_ids, Some(ids.to_vec()));
}

#[test]
fn test_empty_category_list_is_not_null() {
    let mut db = create_test_db();

    let widget = db
        .insert_widget(&NewWidget::new("No categories").with_category_ids([]))
        .unwrap();

    assert_eq!(widget.category_ids, Some(vec![]));
}

#[test]
fn test_insert_rejects_blank_name() {
    let mut db = create_test_db();

    let err = db.insert_widget(&NewWidget::new("   ")).unwrap_err();

    assert!(matches!(err, LeagueError::InvalidWidgetName));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(db.list_widgets().unwrap().is_empty());
}

#[test]
fn test_storage_rejects_missing_name() {
    let db = create_test_db();

    let result = db
        .conn
        .execute("INSERT INTO widgets (description) VALUES ('nameless')", []);
    assert!(result.is_err());

    let result = db
        .conn
        .execute("INSERT INTO widgets (widget_name) VALUES ('')", []);
    assert!(result.is_err());
}

#[test]
fn test_created_at_is_write_once() {
    let (db, widget) = create_test_db_with_widget();

    let result = db.conn.execute(
        "UPDATE widgets SET created_at = 0 WHERE widget_id = ?",
        [widget.id.as_i64()],
    );
    assert!(result.is_err());

    let fetched = db.get_widget(widget.id).unwrap().unwrap();
    assert_eq!(fetched.created_at, widget.created_at);
}

#[test]
fn test_widget_id_is_immutable() {
    let (db, widget) = create_test_db_with_widget();

    let result = db.conn.execute(
        "UPDATE widgets SET widget_id = 999 WHERE widget_id = ?",
        [widget.id.as_i64()],
    );
    assert!(result.is_err());
}

#[test]
fn test_ids_are_unique_and_not_reused() {
    let mut db = create_test_db();

    let first = db.insert_widget(&NewWidget::new("First")).unwrap();
    let second = db.insert_widget(&NewWidget::new("Second")).unwrap();
    assert_ne!(first.id, second.id);

    assert!(db.delete_widget(second.id).unwrap());
    let third = db.insert_widget(&NewWidget::new("Third")).unwrap();
    assert!(third.id > second.id);
}

#[test]
fn test_get_missing_widget() {
    let db = create_test_db();
    assert!(db.get_widget(WidgetId::new(12345)).unwrap().is_none());
}

#[test]
fn test_list_widgets_ordered_by_id() {
    let mut db = create_test_db();
    for name in ["A", "B", "C"] {
        db.insert_widget(&NewWidget::new(name)).unwrap();
    }

    let names: Vec<_> = db
        .list_widgets()
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_update_widget_status() {
    let (mut db, widget) = create_test_db_with_widget();

    assert!(db.update_widget_status(widget.id, Some("archived")).unwrap());

    let fetched = db.get_widget(widget.id).unwrap().unwrap();
    assert_eq!(fetched.status.as_deref(), Some("archived"));
    assert_eq!(fetched.created_at, widget.created_at);
}

#[test]
fn test_status_can_be_cleared() {
    let (mut db, widget) = create_test_db_with_widget();

    assert!(db.update_widget_status(widget.id, None).unwrap());

    let fetched = db.get_widget(widget.id).unwrap().unwrap();
    assert!(fetched.status.is_none());
}

#[test]
fn test_storage_accepts_explicit_null_status() {
    let db = create_test_db();

    db.conn
        .execute(
            "INSERT INTO widgets (widget_name, status) VALUES ('Unflagged', NULL)",
            [],
        )
        .unwrap();

    let widget = db.list_widgets().unwrap().remove(0);
    assert_eq!(widget.name, "Unflagged");
    assert!(widget.status.is_none());
}

#[test]
fn test_update_status_of_missing_widget() {
    let mut db = create_test_db();
    assert!(!db.update_widget_status(WidgetId::new(1), Some("live")).unwrap());
}

#[test]
fn test_delete_widget() {
    let (mut db, widget) = create_test_db_with_widget();

    assert!(db.delete_widget(widget.id).unwrap());
    assert!(!db.delete_widget(widget.id).unwrap());
    assert!(db.get_widget(widget.id).unwrap().is_none());
}

#[test]
fn test_corrupt_category_ids_surface_as_storage_error() {
    let (db, widget) = create_test_db_with_widget();
    db.conn
        .execute(
            "UPDATE widgets SET category_ids = 'not json' WHERE widget_id = ?",
            [widget.id.as_i64()],
        )
        .unwrap();

    let err = db.get_widget(widget.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
}

#[test]
fn test_widget_serializes_camel_case() {
    let (_db, widget) = create_test_db_with_widget();

    let value = serde_json::to_value(&widget).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("redirectLink").is_some());
    assert!(value.get("imageUrl").is_some());
    assert_eq!(value["categoryIds"], serde_json::json!([4, 2]));
}

#[test]
fn test_new_widget_requires_name() {
    let result = serde_json::from_str::<NewWidget>(r#"{"description":"no name"}"#);
    assert!(result.is_err());

    let widget: NewWidget = serde_json::from_str(r#"{"name":"Ok"}"#).unwrap();
    assert_eq!(widget, NewWidget::new("Ok"));
}

#[test]
fn test_visibility_accepts_misspelled_key() {
    let widget: NewWidget =
        serde_json::from_str(r#"{"name":"Legacy","visbility":"private"}"#).unwrap();
    assert_eq!(widget.visibility.as_deref(), Some("private"));
}
