//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MatchId, PlayerId, UserId};

/// Filtering arguments for the player listing.
#[derive(Debug, Args)]
pub struct PlayerListArgs {
    /// Filter by player name (substring match) - repeatable: `-n aspas -n cNed`.
    #[clap(long, short = 'n')]
    pub name: Option<Vec<String>>,

    /// Only show players at or below this MMR.
    #[clap(long)]
    pub max_mmr: Option<i64>,

    /// Include deactivated players in the listing.
    #[clap(long)]
    pub include_inactive: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "vdc-fantasy", about = "VDC Fantasy League CLI")]
pub struct VdcFantasy {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ingest a raw stat batch: upsert players, score each row, append match records.
    ///
    /// Reads from the stat feed by default, or from a local JSON file with
    /// `--input`. One match id covers the whole batch; rerunning with the
    /// same id duplicates rows, so reruns should be deliberate.
    Ingest {
        /// Feed URL (or set `VDC_FANTASY_FEED_URL` env var).
        #[clap(long)]
        feed_url: Option<String>,

        /// Read the batch from a local JSON file instead of the feed.
        #[clap(long)]
        input: Option<PathBuf>,

        /// Match id for this observation window (defaults to a generated UUID).
        #[clap(long)]
        match_id: Option<MatchId>,

        /// Print each ingested row.
        #[clap(long)]
        verbose: bool,
    },

    /// List the draft pool, MMR descending.
    Players {
        #[clap(flatten)]
        filters: PlayerListArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Deactivate a player so they stop appearing in the draft pool.
    Deactivate {
        /// Exact player name.
        #[clap(long)]
        name: String,
    },

    /// Show or submit a user's fantasy roster.
    Roster {
        #[clap(subcommand)]
        cmd: RosterCmd,
    },

    /// A user's roster with per-player and total fantasy points.
    Dashboard {
        /// User id (Discord snowflake).
        #[clap(long, short)]
        user: UserId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Ranked totals across every submitted roster.
    Leaderboard {
        /// Number of rows to show.
        #[clap(long, default_value_t = 10)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Exchange a Discord OAuth code and sync the user record.
    Login {
        /// Authorization code from the OAuth redirect.
        #[clap(long)]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum RosterCmd {
    /// Show a user's stored roster.
    Show {
        /// User id (Discord snowflake).
        #[clap(long, short)]
        user: UserId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Submit a roster of exactly five players.
    ///
    /// Size, MMR cap, player existence/activity, and the lock window are
    /// all enforced here; resubmission overwrites the previous roster.
    Submit {
        /// User id (Discord snowflake).
        #[clap(long, short)]
        user: UserId,

        /// Player id (repeatable, exactly five): `-p 1 -p 2 -p 3 -p 4 -p 5`.
        #[clap(long = "player", short = 'p')]
        players: Vec<PlayerId>,

        /// Override the lock deadline (RFC 3339; or set `VDC_FANTASY_LOCK_AT`).
        #[clap(long)]
        lock_deadline: Option<String>,
    },
}
