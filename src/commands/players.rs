//! Player listing and deactivation commands.

use crate::{
    cli::{types::PlayerFilter, PlayerListArgs},
    error::FantasyError,
    storage::FantasyDatabase,
    Result,
};

/// List the draft pool, MMR descending.
pub fn handle_list_players(args: PlayerListArgs, as_json: bool) -> Result<()> {
    let db = FantasyDatabase::new()?;
    let filter = PlayerFilter::new()
        .with_names(args.name)
        .with_max_mmr(args.max_mmr)
        .with_inactive(args.include_inactive);

    let players = db.list_players(&filter)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players found.");
        return Ok(());
    }

    for player in &players {
        let status = if player.is_active { "" } else { " (inactive)" };
        println!(
            "{:<24} MMR {:>5}  K/D/A {:>3}/{:>3}/{:>3}  ACS {:>6.1}{}",
            player.name, player.mmr, player.kills, player.deaths, player.assists, player.acs, status
        );
    }
    Ok(())
}

/// Mark a player inactive so they leave the draft pool.
pub fn handle_deactivate(name: &str) -> Result<()> {
    let mut db = FantasyDatabase::new()?;

    if !db.deactivate_player(name)? {
        return Err(FantasyError::PlayerNotFound {
            name: name.to_string(),
        });
    }

    println!("✓ Deactivated {}", name);
    Ok(())
}
