//! Widget command implementations

use tracing::info;

use crate::{
    cli::{types::WidgetId, WidgetCmd},
    error::LeagueError,
    storage::{NewWidget, Widget, WidgetDatabase},
    Result,
};

/// Dispatch a widget subcommand against `db`
pub fn handle_widget_command(db: &mut WidgetDatabase, cmd: WidgetCmd) -> Result<()> {
    match cmd {
        WidgetCmd::Add {
            name,
            description,
            visibility,
            status,
            redirect_link,
            image_url,
            category_ids,
        } => {
            let widget = db.insert_widget(&NewWidget {
                name,
                description,
                visibility,
                status,
                redirect_link,
                image_url,
                category_ids,
            })?;
            info!(id = %widget.id, "created widget");
            println!("✓ Created widget {}", widget.id);
            println!("{}", format_widget(&widget));
        }

        WidgetCmd::List { json } => {
            let widgets = db.list_widgets()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&widgets)?);
            } else if widgets.is_empty() {
                println!("No widgets found");
            } else {
                for widget in &widgets {
                    println!("{}", format_widget_line(widget));
                }
            }
        }

        WidgetCmd::Show { id, json } => {
            let widget = require_widget(db, id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&widget)?);
            } else {
                println!("{}", format_widget(&widget));
            }
        }

        WidgetCmd::SetStatus { id, status } => {
            if !db.update_widget_status(id, status.as_deref())? {
                return Err(LeagueError::WidgetNotFound { id: id.as_i64() });
            }
            info!(%id, status = ?status, "updated widget status");
            match status {
                Some(status) => println!("✓ Widget {} is now {}", id, status),
                None => println!("✓ Cleared status of widget {}", id),
            }
        }

        WidgetCmd::Remove { id } => {
            if !db.delete_widget(id)? {
                return Err(LeagueError::WidgetNotFound { id: id.as_i64() });
            }
            info!(%id, "removed widget");
            println!("✓ Removed widget {}", id);
        }
    }

    Ok(())
}

fn require_widget(db: &WidgetDatabase, id: WidgetId) -> Result<Widget> {
    db.get_widget(id)?
        .ok_or(LeagueError::WidgetNotFound { id: id.as_i64() })
}

/// One-line summary: `id  name  [status]  visibility`
pub fn format_widget_line(widget: &Widget) -> String {
    format!(
        "{:>5}  {}  [{}]  {}",
        widget.id.as_i64(),
        widget.name,
        widget.status.as_deref().unwrap_or("-"),
        widget.visibility.as_deref().unwrap_or("-")
    )
}

/// Multi-line detail view; unset fields are omitted.
pub fn format_widget(widget: &Widget) -> String {
    let mut lines = vec![
        format!("ID:          {}", widget.id),
        format!("Name:        {}", widget.name),
        format!("Created at:  {}", widget.created_at),
    ];

    let optional = [
        ("Status", widget.status.as_deref()),
        ("Description", widget.description.as_deref()),
        ("Visibility", widget.visibility.as_deref()),
        ("Link", widget.redirect_link.as_deref()),
        ("Image", widget.image_url.as_deref()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{:<13}{}", format!("{label}:"), value));
        }
    }

    if let Some(ids) = &widget.category_ids {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        lines.push(format!("Categories:  {}", ids.join(", ")));
    }

    lines.join("\n")
}
