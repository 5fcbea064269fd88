//! Data models for the storage layer

use crate::cli::types::{MatchId, PlayerId, UserId};
use serde::{Deserialize, Serialize};

/// A player in the draft pool, with cumulative raw stat totals.
///
/// Created and refreshed by ingestion upserts keyed on `name`. Players are
/// never deleted, only deactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub mmr: i64,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub acs: f64,
    pub is_active: bool,
}

/// One scored (player, match) observation. Append-only once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatRecord {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub acs: f64,
    pub fantasy_points: f64,
    pub created_at: u64,
}

/// A user's submitted roster. Overwritten wholesale on resubmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FantasyRoster {
    pub user_id: UserId,
    pub player_ids: Vec<PlayerId>,
    pub mmr_total: i64,
    pub updated_at: u64,
}

/// Local copy of an externally-authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl Player {
    /// Test helper: an active player with zeroed stat totals.
    pub fn test_named(player_id: i64, name: &str, mmr: i64) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            name: name.to_string(),
            mmr,
            kills: 0,
            deaths: 0,
            assists: 0,
            acs: 0.0,
            is_active: true,
        }
    }
}
