//! Basic database query operations

use super::{models::*, schema::FantasyDatabase};
use crate::aggregate::ScoredRecord;
use crate::cli::types::PlayerFilter;
use crate::feed::RawPlayerStat;
use crate::{PlayerId, UserId};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

impl FantasyDatabase {
    /// Insert or update a player from one raw feed entry, keyed on name.
    ///
    /// Raw stat totals are replaced by the feed's values; MMR is only
    /// touched when the feed supplies one. Re-ingesting a player always
    /// reactivates them.
    pub fn upsert_player_from_feed(&mut self, stat: &RawPlayerStat) -> Result<PlayerId> {
        self.conn.execute(
            "INSERT INTO players (name, mmr, kills, deaths, assists, acs, is_active)
             VALUES (?1, COALESCE(?2, 0), ?3, ?4, ?5, ?6, 1)
             ON CONFLICT(name) DO UPDATE SET
                 mmr = COALESCE(?2, mmr),
                 kills = excluded.kills,
                 deaths = excluded.deaths,
                 assists = excluded.assists,
                 acs = excluded.acs,
                 is_active = 1",
            params![stat.name, stat.mmr, stat.kills, stat.deaths, stat.assists, stat.acs],
        )?;

        let id: i64 = self.conn.query_row(
            "SELECT player_id FROM players WHERE name = ?1",
            params![stat.name],
            |row| row.get(0),
        )?;
        Ok(PlayerId::new(id))
    }

    /// Mark a player inactive. Returns false if no such player exists.
    pub fn deactivate_player(&mut self, name: &str) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE players SET is_active = 0 WHERE name = ?1",
            params![name],
        )?;
        Ok(rows_affected > 0)
    }

    /// Append one scored observation. `created_at` is stamped here.
    pub fn insert_match_stat(&mut self, record: &MatchStatRecord) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.conn.execute(
            "INSERT INTO player_match_stats
             (player_id, match_id, kills, deaths, assists, acs, fantasy_points, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.player_id.as_i64(),
                record.match_id.as_str(),
                record.kills,
                record.deaths,
                record.assists,
                record.acs,
                record.fantasy_points,
                now
            ],
        )?;
        Ok(())
    }

    /// Fetch (player_id, fantasy_points) pairs for the given roster ids.
    pub fn scored_records_for(&self, player_ids: &[PlayerId]) -> Result<Vec<ScoredRecord>> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = String::from(
            "SELECT player_id, fantasy_points FROM player_match_stats WHERE player_id IN (",
        );
        for i in 0..player_ids.len() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push('?');
        }
        query.push(')');

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(player_ids.iter().map(|id| id.as_i64())),
            |row| {
                Ok(ScoredRecord {
                    player_id: PlayerId::new(row.get(0)?),
                    fantasy_points: row.get(1)?,
                })
            },
        )?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// List the draft pool with optional name/MMR filters, MMR descending.
    pub fn list_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let mut query = String::from(
            "SELECT player_id, name, mmr, kills, deaths, assists, acs, is_active
             FROM players WHERE 1 = 1",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if !filter.include_inactive {
            query.push_str(" AND is_active = 1");
        }

        if let Some(names) = &filter.names {
            if !names.is_empty() {
                query.push_str(" AND (");
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        query.push_str(" OR ");
                    }
                    query.push_str("name LIKE ?");
                    params.push(Box::new(format!("%{}%", name)));
                }
                query.push(')');
            }
        }

        if let Some(max_mmr) = filter.max_mmr {
            query.push_str(" AND mmr <= ?");
            params.push(Box::new(max_mmr));
        }

        query.push_str(" ORDER BY mmr DESC, name ASC");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Look up one player by id.
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, name, mmr, kills, deaths, assists, acs, is_active
                 FROM players WHERE player_id = ?1",
                params![player_id.as_i64()],
                Self::row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Fetch the player rows for a set of ids, in id order.
    pub fn get_players_by_ids(&self, player_ids: &[PlayerId]) -> Result<Vec<Player>> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = String::from(
            "SELECT player_id, name, mmr, kills, deaths, assists, acs, is_active
             FROM players WHERE player_id IN (",
        );
        for i in 0..player_ids.len() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push('?');
        }
        query.push_str(") ORDER BY player_id");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(player_ids.iter().map(|id| id.as_i64())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Overwrite a user's roster wholesale. `updated_at` is stamped here.
    pub fn upsert_roster(&mut self, roster: &FantasyRoster) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let ids: Vec<i64> = roster.player_ids.iter().map(|id| id.as_i64()).collect();
        let player_ids_json = serde_json::to_string(&ids)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO fantasy_teams (user_id, player_ids, mmr_total, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                roster.user_id.as_str(),
                player_ids_json,
                roster.mmr_total,
                now
            ],
        )?;
        Ok(())
    }

    /// Fetch a user's roster, if any.
    pub fn get_roster(&self, user_id: &UserId) -> Result<Option<FantasyRoster>> {
        let roster = self
            .conn
            .query_row(
                "SELECT user_id, player_ids, mmr_total, updated_at
                 FROM fantasy_teams WHERE user_id = ?1",
                params![user_id.as_str()],
                Self::row_to_roster,
            )
            .optional()?;
        Ok(roster)
    }

    /// All submitted rosters, in user-id order.
    pub fn all_rosters(&self) -> Result<Vec<FantasyRoster>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, player_ids, mmr_total, updated_at
             FROM fantasy_teams ORDER BY user_id",
        )?;

        let rows = stmt.query_map([], Self::row_to_roster)?;

        let mut rosters = Vec::new();
        for row in rows {
            rosters.push(row?);
        }
        Ok(rosters)
    }

    /// Insert or refresh a user row; safe to run on every login.
    pub fn upsert_user(&mut self, user: &UserIdentity) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (id, username, avatar_url)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                 username = excluded.username,
                 avatar_url = excluded.avatar_url",
            params![user.id.as_str(), user.username, user.avatar_url],
        )?;
        Ok(())
    }

    /// Look up one user by id.
    pub fn get_user(&self, user_id: &UserId) -> Result<Option<UserIdentity>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, username, avatar_url FROM users WHERE id = ?1",
                params![user_id.as_str()],
                |row| {
                    Ok(UserIdentity {
                        id: UserId::new(row.get::<_, String>(0)?),
                        username: row.get(1)?,
                        avatar_url: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            name: row.get(1)?,
            mmr: row.get(2)?,
            kills: row.get(3)?,
            deaths: row.get(4)?,
            assists: row.get(5)?,
            acs: row.get(6)?,
            is_active: row.get(7)?,
        })
    }

    fn row_to_roster(row: &Row) -> rusqlite::Result<FantasyRoster> {
        let user_id: String = row.get(0)?;
        let player_ids_json: String = row.get(1)?;
        let ids: Vec<i64> = serde_json::from_str(&player_ids_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        Ok(FantasyRoster {
            user_id: UserId::new(user_id),
            player_ids: ids.into_iter().map(PlayerId::new).collect(),
            mmr_total: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }
}
