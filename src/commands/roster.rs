//! Roster show and submit commands.
//!
//! Submission is the authoritative validation point: lock window, team
//! size, player existence/activity, and the MMR cap are all checked here
//! against the store, never trusted from the caller.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::{
    config::LeagueRules,
    error::FantasyError,
    roster::{mmr_total, replay_selections, validate_submission, Pick, Selection, Submission},
    storage::{FantasyDatabase, FantasyRoster},
    PlayerId, Result, UserId,
};

use super::common::CommandContext;

/// Validate and store a roster submission. Returns the stored roster.
///
/// The id set is replayed through the selection validator one pick at a
/// time, so the interactive draft rules and the submission rules cannot
/// drift apart, and `mmr_total` is recomputed from stored player rows.
pub fn submit_roster(
    db: &mut FantasyDatabase,
    rules: &LeagueRules,
    user_id: &UserId,
    player_ids: &[PlayerId],
    now: DateTime<Utc>,
) -> Result<FantasyRoster> {
    // Submissions are sets; duplicate ids collapse before any size check.
    let ids: Vec<PlayerId> = player_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    match validate_submission(ids.len(), rules, now) {
        Submission::Accepted => {}
        Submission::RejectedLocked => {
            return Err(FantasyError::RosterLocked {
                deadline: rules.lock_deadline.to_rfc3339(),
            })
        }
        Submission::RejectedIncompleteSize => {
            return Err(FantasyError::RosterIncomplete {
                expected: rules.roster_size,
                actual: ids.len(),
            })
        }
    }

    let players = db.get_players_by_ids(&ids)?;
    for id in &ids {
        if !players.iter().any(|p| p.player_id == *id) {
            return Err(FantasyError::PlayerNotFound {
                name: id.to_string(),
            });
        }
    }
    for player in &players {
        if !player.is_active {
            return Err(FantasyError::InactivePlayer {
                name: player.name.clone(),
            });
        }
    }

    let picks: Vec<Pick> = players
        .iter()
        .map(|p| Pick::new(p.player_id, p.mmr))
        .collect();

    let accepted = replay_selections(&picks, rules, now).map_err(|rejection| match rejection {
        Selection::RejectedOverCap => FantasyError::RosterOverCap {
            total: mmr_total(&picks),
            cap: rules.mmr_cap,
        },
        Selection::RejectedLocked => FantasyError::RosterLocked {
            deadline: rules.lock_deadline.to_rfc3339(),
        },
        _ => FantasyError::RosterIncomplete {
            expected: rules.roster_size,
            actual: ids.len(),
        },
    })?;

    let roster = FantasyRoster {
        user_id: user_id.clone(),
        player_ids: ids,
        mmr_total: mmr_total(&accepted),
        updated_at: 0, // stamped by the database
    };
    db.upsert_roster(&roster)?;
    Ok(roster)
}

/// `roster submit` entry point.
pub fn handle_submit_roster(
    user_id: UserId,
    player_ids: Vec<PlayerId>,
    lock_deadline: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(lock_deadline.as_deref())?;
    let roster = submit_roster(&mut ctx.db, &ctx.rules, &user_id, &player_ids, Utc::now())?;

    println!(
        "✓ Roster submitted for {} ({} players, MMR total {}/{})",
        user_id,
        roster.player_ids.len(),
        roster.mmr_total,
        ctx.rules.mmr_cap
    );
    Ok(())
}

/// `roster show` entry point.
pub fn handle_show_roster(user_id: UserId, as_json: bool) -> Result<()> {
    let db = FantasyDatabase::new()?;

    let Some(roster) = db.get_roster(&user_id)? else {
        return Err(FantasyError::RosterNotFound {
            user_id: user_id.to_string(),
        });
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
        return Ok(());
    }

    println!("Roster for {} (MMR total {}):", roster.user_id, roster.mmr_total);
    let players = super::common::load_roster_players(&db, &roster)?;
    for player in &players {
        println!("  {:<24} MMR {:>5}", player.name, player.mmr);
    }
    Ok(())
}
