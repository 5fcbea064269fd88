//! Database schema and connection management

use crate::error::FantasyError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for the roster store
pub struct FantasyDatabase {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Open the default database file and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::new_at(&db_path)
    }

    /// Open (or create) a database at an explicit path
    pub fn new_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| FantasyError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine data directory",
        )))?;
        Ok(data_dir.join("vdc-fantasy").join("fantasy.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Draft pool; rows are deactivated, never deleted
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                mmr INTEGER NOT NULL DEFAULT 0,
                kills INTEGER NOT NULL DEFAULT 0,
                deaths INTEGER NOT NULL DEFAULT 0,
                assists INTEGER NOT NULL DEFAULT 0,
                acs REAL NOT NULL DEFAULT 0,
                is_active INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        // Append-only scored observations
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_match_stats (
                player_id INTEGER NOT NULL,
                match_id TEXT NOT NULL,
                kills INTEGER NOT NULL,
                deaths INTEGER NOT NULL,
                assists INTEGER NOT NULL,
                acs REAL NOT NULL,
                fantasy_points REAL NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        // One roster per user, player_ids stored as a JSON array
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fantasy_teams (
                user_id TEXT PRIMARY KEY,
                player_ids TEXT NOT NULL,
                mmr_total INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                avatar_url TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_match_stats_player
             ON player_match_stats(player_id)",
            [],
        )?;

        Ok(())
    }
}
