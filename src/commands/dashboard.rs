//! Dashboard command: one user's roster with aggregated fantasy points.

use serde::Serialize;

use crate::{
    aggregate::{roster_points, RosterPoints},
    error::FantasyError,
    storage::{FantasyDatabase, FantasyRoster, Player},
    Result, UserId,
};

use super::common::load_roster_players;

/// Everything the dashboard view needs for one user.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub roster: FantasyRoster,
    pub players: Vec<Player>,
    pub points: RosterPoints,
}

/// Assemble the dashboard for a user from the store.
pub fn build_dashboard(db: &FantasyDatabase, user_id: &UserId) -> Result<Dashboard> {
    let Some(roster) = db.get_roster(user_id)? else {
        return Err(FantasyError::RosterNotFound {
            user_id: user_id.to_string(),
        });
    };

    let players = load_roster_players(db, &roster)?;
    let records = db.scored_records_for(&roster.player_ids)?;
    let points = roster_points(&roster.player_ids, &records);

    Ok(Dashboard {
        roster,
        players,
        points,
    })
}

/// `dashboard` entry point.
pub fn handle_dashboard(user_id: UserId, as_json: bool) -> Result<()> {
    let db = FantasyDatabase::new()?;
    let dashboard = build_dashboard(&db, &user_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!(
        "Fantasy team for {} (MMR total {}):",
        dashboard.roster.user_id, dashboard.roster.mmr_total
    );
    for id in &dashboard.roster.player_ids {
        let name = dashboard
            .players
            .iter()
            .find(|p| p.player_id == *id)
            .map(|p| p.name.as_str())
            .unwrap_or("(unknown player)");
        let points = dashboard.points.per_player.get(id).copied().unwrap_or(0.0);
        println!("  {:<24} {:>8.2} pts", name, points);
    }
    println!("  {:<24} {:>8.2} pts", "TOTAL", dashboard.points.total);
    Ok(())
}
