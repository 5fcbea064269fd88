//! Common utilities and helper functions shared across commands.

use crate::{
    config::LeagueRules,
    storage::{FantasyDatabase, FantasyRoster, Player},
    Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: FantasyDatabase,
    pub rules: LeagueRules,
}

impl CommandContext {
    /// Open the database and resolve league rules for one invocation.
    pub fn new(lock_deadline: Option<&str>) -> Result<Self> {
        let db = FantasyDatabase::new()?;
        let rules = LeagueRules::resolve(lock_deadline)?;
        Ok(Self { db, rules })
    }
}

/// Load the player rows behind a roster, warning about dangling ids.
///
/// A roster referencing a player id with no row is a data-integrity gap,
/// not an error: the reference contributes zero points and the dashboard
/// still renders.
pub fn load_roster_players(db: &FantasyDatabase, roster: &FantasyRoster) -> Result<Vec<Player>> {
    let players = db.get_players_by_ids(&roster.player_ids)?;

    if players.len() != roster.player_ids.len() {
        for id in &roster.player_ids {
            if !players.iter().any(|p| p.player_id == *id) {
                log::warn!(
                    "roster for user {} references missing player id {}",
                    roster.user_id,
                    id
                );
            }
        }
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerId, UserId};

    #[test]
    fn test_load_roster_players_tolerates_dangling_ids() {
        let mut db = FantasyDatabase::new_in_memory().unwrap();
        let id = db
            .upsert_player_from_feed(&crate::feed::RawPlayerStat {
                name: "aspas".to_string(),
                kills: 0,
                deaths: 0,
                assists: 0,
                acs: 0.0,
                mmr: Some(300),
            })
            .unwrap();

        let roster = FantasyRoster {
            user_id: UserId::new("u"),
            player_ids: vec![id, PlayerId::new(9999)],
            mmr_total: 300,
            updated_at: 0,
        };

        let players = load_roster_players(&db, &roster).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].player_id, id);
    }
}
