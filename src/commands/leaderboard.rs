//! Leaderboard command: every roster's total, ranked.

use crate::{
    aggregate::{build_leaderboard, roster_points, LeaderboardRow},
    storage::FantasyDatabase,
    Result,
};

/// Compute ranked rows for every submitted roster.
///
/// Users without a synced profile row still rank; they show as "Unknown",
/// and rosters whose players have no match records total 0.0.
pub fn leaderboard_rows(db: &FantasyDatabase) -> Result<Vec<LeaderboardRow>> {
    let mut rows = Vec::new();

    for roster in db.all_rosters()? {
        let records = db.scored_records_for(&roster.player_ids)?;
        let points = roster_points(&roster.player_ids, &records);

        let (username, avatar_url) = match db.get_user(&roster.user_id)? {
            Some(user) => (user.username, user.avatar_url),
            None => {
                log::warn!("no user record for roster owner {}", roster.user_id);
                ("Unknown".to_string(), None)
            }
        };

        rows.push(LeaderboardRow {
            user_id: roster.user_id,
            username,
            avatar_url,
            total: points.total,
        });
    }

    Ok(build_leaderboard(rows))
}

/// `leaderboard` entry point.
pub fn handle_leaderboard(limit: usize, as_json: bool) -> Result<()> {
    let db = FantasyDatabase::new()?;
    let mut rows = leaderboard_rows(&db)?;
    rows.truncate(limit);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No teams submitted yet.");
        return Ok(());
    }

    for (rank, row) in rows.iter().enumerate() {
        println!("{:>3}. {:<24} {:>8.2} pts", rank + 1, row.username, row.total);
    }
    Ok(())
}
