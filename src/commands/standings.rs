//! Standings command implementation

use crate::{
    league::{LeagueStandingsData, StandingsClient, TeamStanding},
    Result,
};

use super::resolve_api_config;

/// Handle the standings command
pub async fn handle_standings(base_url: Option<String>, as_json: bool) -> Result<()> {
    let config = resolve_api_config(base_url)?;
    let client = StandingsClient::new(config);

    let standings = client.fetch_league_standings().await?;
    println!("{}", format_standings(&standings, as_json)?);

    Ok(())
}

/// Text table when the payload lists teams, pretty JSON otherwise.
pub fn format_standings(standings: &LeagueStandingsData, as_json: bool) -> Result<String> {
    match standings.teams() {
        Some(teams) if !as_json => Ok(format_team_table(&teams)),
        _ => Ok(serde_json::to_string_pretty(standings.as_value())?),
    }
}

fn format_team_table(teams: &[TeamStanding]) -> String {
    if teams.is_empty() {
        return "No teams in standings".to_string();
    }

    let width = teams
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut lines = vec![format!(
        "{:>3}  {:<width$}  {:>4}  {:>4}  {:>5}",
        "#", "Team", "W", "L", "PCT"
    )];
    for (rank, team) in teams.iter().enumerate() {
        lines.push(format!(
            "{:>3}  {:<width$}  {:>4}  {:>4}  {:>5.3}",
            rank + 1,
            team.name,
            team.wins,
            team.losses,
            team.win_pct()
        ));
    }
    lines.join("\n")
}
