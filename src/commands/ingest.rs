//! Ingest command: pull a raw stat batch and persist scored records.
//!
//! For each feed entry: upsert the player row keyed on name, compute
//! fantasy points, append one match record. Points are computed here and
//! nowhere else; read paths only sum what this writes.

use reqwest::Client;
use std::path::PathBuf;

use crate::{
    feed::{fetch_stat_batch, read_stat_batch_file, resolve_feed_url},
    scoring::fantasy_points,
    storage::{FantasyDatabase, MatchStatRecord},
    MatchId, Result,
};

pub struct IngestParams {
    pub feed_url: Option<String>,
    pub input: Option<PathBuf>,
    pub match_id: Option<MatchId>,
    pub verbose: bool,
}

/// Ingest one observation window's stat batch.
pub async fn handle_ingest(params: IngestParams) -> Result<()> {
    let batch = match &params.input {
        Some(path) => read_stat_batch_file(path)?,
        None => {
            let url = resolve_feed_url(params.feed_url.as_deref());
            let client = Client::new();
            fetch_stat_batch(&client, &url).await?
        }
    };

    let match_id = params.match_id.unwrap_or_else(MatchId::generate);
    let mut db = FantasyDatabase::new()?;
    let mut ingested = 0;

    for stat in &batch {
        let player_id = db.upsert_player_from_feed(stat)?;
        let points = fantasy_points(stat.kills, stat.deaths, stat.assists, stat.acs);

        db.insert_match_stat(&MatchStatRecord {
            player_id,
            match_id: match_id.clone(),
            kills: stat.kills,
            deaths: stat.deaths,
            assists: stat.assists,
            acs: stat.acs,
            fantasy_points: points,
            created_at: 0, // stamped by the database
        })?;
        ingested += 1;

        if params.verbose {
            println!("✓ {}: {:.2} pts", stat.name, points);
        }
    }

    println!("✓ Ingested {} stat rows under match id {}", ingested, match_id);
    Ok(())
}
