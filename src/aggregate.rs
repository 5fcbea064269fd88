//! Roster point aggregation and leaderboard ordering.
//!
//! Pure group-by-sum over already-scored match records. The sums are
//! commutative, so results are identical regardless of the order rows come
//! back from the store.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{PlayerId, UserId};


/// One scored observation as the aggregator consumes it.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord {
    pub player_id: PlayerId,
    pub fantasy_points: f64,
}

/// Aggregated points for one roster.
#[derive(Debug, Clone, Serialize)]
pub struct RosterPoints {
    /// Every roster member appears here, zero-record players included.
    pub per_player: BTreeMap<PlayerId, f64>,
    pub total: f64,
}

/// One leaderboard row, pre-sort.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub user_id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
    pub total: f64,
}

/// Sum fantasy points per roster member across `records`.
///
/// Records for players outside the roster are ignored; roster members with
/// no records contribute 0.0 and still appear in the result.
pub fn roster_points(roster: &[PlayerId], records: &[ScoredRecord]) -> RosterPoints {
    let mut per_player: BTreeMap<PlayerId, f64> =
        roster.iter().map(|&id| (id, 0.0)).collect();

    for record in records {
        if let Some(points) = per_player.get_mut(&record.player_id) {
            *points += record.fantasy_points;
        }
    }

    let total = per_player.values().sum();
    RosterPoints { per_player, total }
}

/// Order leaderboard rows by total points, highest first.
///
/// Ties break by ascending user id so the ordering is deterministic no
/// matter how the rows were assembled.
pub fn build_leaderboard(mut rows: Vec<LeaderboardRow>) -> Vec<LeaderboardRow> {
    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    rows
}
