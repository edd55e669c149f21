//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{CategoryId, WidgetId};

#[derive(Debug, Subcommand)]
pub enum WidgetCmd {
    /// Create a widget. Status defaults to `pending`.
    Add {
        /// Display name (required, non-empty).
        #[clap(long, short)]
        name: String,

        #[clap(long, short)]
        description: Option<String>,

        /// Visibility flag, e.g. public or private.
        #[clap(long)]
        visibility: Option<String>,

        /// Workflow status; omitted means `pending`.
        #[clap(long)]
        status: Option<String>,

        /// Where the card links to.
        #[clap(long)]
        redirect_link: Option<String>,

        #[clap(long)]
        image_url: Option<String>,

        /// Category id (repeatable, order is kept): `-c 3 -c 1`.
        #[clap(long = "category", short = 'c')]
        category_ids: Option<Vec<CategoryId>>,
    },

    /// List all widgets.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one widget.
    Show {
        id: WidgetId,

        /// Output as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Change a widget's status. Omit STATUS to clear it.
    SetStatus {
        id: WidgetId,
        status: Option<String>,
    },

    /// Delete a widget.
    Remove { id: WidgetId },
}

#[derive(Debug, Parser)]
#[clap(name = "league-board", about = "League standings and widget management")]
pub struct LeagueBoard {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch league standings from the backend API
    Standings {
        /// API base URL (or set `NEXT_PUBLIC_API_URL` env var).
        #[clap(long)]
        base_url: Option<String>,

        /// Print the raw standings JSON.
        #[clap(long)]
        json: bool,
    },

    /// Manage widget records in the local database
    Widget {
        /// Database file (defaults to the user data directory).
        #[clap(long, global = true)]
        db: Option<PathBuf>,

        #[clap(subcommand)]
        cmd: WidgetCmd,
    },

    /// Print the password requirements shown on account forms
    PasswordRules,
}
