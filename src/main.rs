//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use league_board::{
    cli::{Commands, LeagueBoard},
    commands::{
        open_database, password_rules::handle_password_rules, standings::handle_standings,
        widgets::handle_widget_command,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--json` output stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app = LeagueBoard::parse();

    match app.command {
        Commands::Standings { base_url, json } => handle_standings(base_url, json)
            .await
            .context("failed to load league standings")?,

        Commands::Widget { db, cmd } => {
            let mut db = open_database(db).context("failed to open widget database")?;
            handle_widget_command(&mut db, cmd)?
        }

        Commands::PasswordRules => handle_password_rules(),
    }

    Ok(())
}
